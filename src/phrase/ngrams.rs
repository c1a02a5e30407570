//! N-gram phrase generation
//!
//! Phrases are every contiguous window of `ngram_length` tokens, sliding by
//! one token, over the full (unfiltered) token stream.

use crate::errors::{Result, TextRankError};

/// Every contiguous `length`-token window of `tokens`, in stream order.
///
/// Returns no windows when `length` is 0 or exceeds the token count.
pub fn ngrams<S: AsRef<str>>(tokens: &[S], length: usize) -> Vec<Vec<String>> {
    if length == 0 {
        return Vec::new();
    }
    tokens
        .windows(length)
        .map(|w| w.iter().map(|t| t.as_ref().to_string()).collect())
        .collect()
}

/// A candidate phrase: one n-gram window of the token stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePhrase {
    /// Index of the window (= index of its first token)
    pub position: usize,
    /// The window tokens joined by single spaces
    pub text: String,
}

impl CandidatePhrase {
    /// Create a candidate from its window tokens
    pub fn from_tokens<S: AsRef<str>>(position: usize, tokens: &[S]) -> Self {
        let text = tokens
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" ");
        Self { position, text }
    }

    /// The phrase tokens
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.text.split(' ')
    }
}

/// Slices a token stream into overlapping candidate phrases
#[derive(Debug, Clone, Copy)]
pub struct PhraseGenerator {
    ngram_length: usize,
}

impl Default for PhraseGenerator {
    fn default() -> Self {
        Self::new(8)
    }
}

impl PhraseGenerator {
    /// Create a generator for windows of `ngram_length` tokens
    pub fn new(ngram_length: usize) -> Self {
        Self { ngram_length }
    }

    /// The configured window length
    pub fn ngram_length(&self) -> usize {
        self.ngram_length
    }

    /// Generate the `T - L + 1` candidate phrases of a `T`-token stream.
    ///
    /// Fails with [`TextRankError::InsufficientInput`] when the stream is
    /// shorter than one window.
    pub fn generate<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Vec<CandidatePhrase>> {
        if self.ngram_length == 0 || tokens.len() < self.ngram_length {
            return Err(TextRankError::insufficient_input(
                tokens.len(),
                self.ngram_length,
            ));
        }

        Ok(ngrams(tokens, self.ngram_length)
            .into_iter()
            .enumerate()
            .map(|(position, window)| CandidatePhrase::from_tokens(position, &window))
            .collect())
    }
}
