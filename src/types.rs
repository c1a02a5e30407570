//! Core types for ngram_textrank
//!
//! This module defines the ranked phrase record and the extraction
//! configuration shared by every pipeline stage.

use crate::errors::{Result, TextRankError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// ============================================================================
// Phrase
// ============================================================================

/// A ranked n-gram phrase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phrase {
    /// The phrase tokens joined by single spaces
    pub text: String,
    /// Stationary probability of the phrase in the damped random walk
    pub score: f64,
    /// The rank (1-indexed, based on score)
    pub rank: usize,
    /// Index of the window in the generated phrase sequence
    /// (equal to the position of its first token in the token stream)
    pub position: usize,
}

impl Phrase {
    /// Create a new, unranked phrase
    pub fn new(text: impl Into<String>, score: f64, position: usize) -> Self {
        Self {
            text: text.into(),
            score,
            rank: 0,
            position,
        }
    }

    /// Stable tie-breaker comparator for deterministic phrase ranking.
    ///
    /// Orders by score descending; equal scores fall back to the earlier
    /// window position. This is a total order, so it is safe for `sort_by`.
    pub fn stable_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| self.position.cmp(&other.position))
    }

    /// Number of tokens in the phrase
    pub fn token_count(&self) -> usize {
        self.text.split(' ').filter(|t| !t.is_empty()).count()
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for n-gram TextRank extraction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextRankConfig {
    /// Number of tokens per phrase window
    pub ngram_length: usize,
    /// Damping factor for the random walk (typically 0.85)
    pub damping: f64,
    /// Convergence threshold on the L2 change of the rank vector
    pub convergence_threshold: f64,
    /// Maximum power iterations before reporting non-convergence
    pub max_iterations: usize,
    /// Number of top phrases to return (0 = all)
    pub top_n: usize,
    /// Language code for stopwords (e.g., "en", "de", "fr")
    pub language: String,
    /// Additional stopwords (extends the built-in list)
    pub stopwords: Vec<String>,
    /// Seed for the random rank initialization (None = entropy)
    pub seed: Option<u64>,
    /// Maximum number of phrases before rejecting the input.
    /// The similarity graph is N x N, so this bounds memory.
    pub max_phrases: Option<usize>,
}

impl Default for TextRankConfig {
    fn default() -> Self {
        Self {
            ngram_length: 8,
            damping: 0.85,
            convergence_threshold: 1e-4,
            max_iterations: 100,
            top_n: 5,
            language: "en".to_string(),
            stopwords: Vec::new(),
            seed: None,
            max_phrases: None,
        }
    }
}

impl TextRankConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the config to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.ngram_length == 0 {
            return Err(TextRankError::invalid_config("ngram_length must be > 0"));
        }

        if !(0.0..=1.0).contains(&self.damping) {
            return Err(TextRankError::invalid_config(format!(
                "damping must be between 0 and 1, got {}",
                self.damping
            )));
        }

        if self.convergence_threshold.is_nan() || self.convergence_threshold <= 0.0 {
            return Err(TextRankError::invalid_config(
                "convergence_threshold must be > 0",
            ));
        }

        if self.max_iterations == 0 {
            return Err(TextRankError::invalid_config("max_iterations must be > 0"));
        }

        if self.max_phrases == Some(0) {
            return Err(TextRankError::invalid_config("max_phrases must be > 0"));
        }

        Ok(())
    }

    /// Builder method: set n-gram length
    pub fn with_ngram_length(mut self, ngram_length: usize) -> Self {
        self.ngram_length = ngram_length;
        self
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: set convergence threshold
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Builder method: set max iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Builder method: set top N phrases to return
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Builder method: set language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Builder method: add extra stopwords
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords.extend(words.into_iter().map(Into::into));
        self
    }

    /// Builder method: fix the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder method: set maximum phrase count
    pub fn with_max_phrases(mut self, max: usize) -> Self {
        self.max_phrases = Some(max);
        self
    }
}
