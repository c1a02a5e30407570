//! Error types for ngram_textrank
//!
//! Every failure is terminal for a single extraction: no partial rankings
//! are returned. Callers typically react to [`TextRankError::DegenerateGraph`]
//! or [`TextRankError::InsufficientInput`] by retrying with a shorter
//! n-gram length.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TextRankError>;

/// Main error type for ngram_textrank
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TextRankError {
    /// The normalized text has fewer tokens than one n-gram window
    #[error("Insufficient input: {tokens} tokens, need at least {ngram_length}")]
    InsufficientInput { tokens: usize, ngram_length: usize },

    /// The similarity graph cannot be turned into a random walk
    /// (an isolated phrase, or a non-finite rank value)
    #[error("Degenerate graph (too many ngrams): {message}")]
    DegenerateGraph { message: String },

    /// Power iteration did not reach the tolerance within the iteration cap
    #[error("Convergence failure after {iterations} iterations (delta={delta:.6})")]
    ConvergenceFailure { iterations: usize, delta: f64 },

    /// The input produced more phrases than the configured limit
    #[error("Input too large: {phrases} phrases exceeds limit of {limit}")]
    InputTooLarge { phrases: usize, limit: usize },

    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl TextRankError {
    /// Create an insufficient input error
    pub fn insufficient_input(tokens: usize, ngram_length: usize) -> Self {
        Self::InsufficientInput {
            tokens,
            ngram_length,
        }
    }

    /// Create a degenerate graph error
    pub fn degenerate_graph(message: impl Into<String>) -> Self {
        Self::DegenerateGraph {
            message: message.into(),
        }
    }

    /// Create a convergence failure error
    pub fn convergence_failure(iterations: usize, delta: f64) -> Self {
        Self::ConvergenceFailure { iterations, delta }
    }

    /// Create an input too large error
    pub fn input_too_large(phrases: usize, limit: usize) -> Self {
        Self::InputTooLarge { phrases, limit }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Check if this error indicates non-convergence
    pub fn is_convergence_failure(&self) -> bool {
        matches!(self, Self::ConvergenceFailure { .. })
    }

    /// Check if this error comes from a numerically degenerate graph
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::DegenerateGraph { .. })
    }
}

impl From<serde_json::Error> for TextRankError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
