//! Vocabulary construction
//!
//! The vocabulary is the feature basis for phrase vectors: every distinct
//! non-stopword token, in first-occurrence order.

use super::stopwords::StopwordFilter;
use rustc_hash::FxHashMap;

/// Ordered set of unique terms with O(1) index lookup
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// Maps term -> index into `terms`
    term_to_id: FxHashMap<String, u32>,
    /// Terms in first-occurrence order
    terms: Vec<String>,
}

impl Vocabulary {
    /// Create an empty vocabulary
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the vocabulary of a token stream, skipping stopwords
    pub fn build<S: AsRef<str>>(tokens: &[S], stopwords: &StopwordFilter) -> Self {
        let mut vocab = Self::new();
        for term in stopwords.remove_stopwords(tokens) {
            vocab.insert(term);
        }
        vocab
    }

    /// Insert a term, returning its index. Existing terms keep their index.
    pub fn insert(&mut self, term: impl Into<String>) -> u32 {
        let term = term.into();
        if let Some(&id) = self.term_to_id.get(&term) {
            return id;
        }

        let id = self.terms.len() as u32;
        self.term_to_id.insert(term.clone(), id);
        self.terms.push(term);
        id
    }

    /// Index of a term, if present
    pub fn get(&self, term: &str) -> Option<u32> {
        self.term_to_id.get(term).copied()
    }

    /// Check if a term is in the vocabulary
    pub fn contains(&self, term: &str) -> bool {
        self.term_to_id.contains_key(term)
    }

    /// Term at the given index
    pub fn term(&self, id: u32) -> Option<&str> {
        self.terms.get(id as usize).map(String::as_str)
    }

    /// All terms in first-occurrence order
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Number of terms (V)
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Check if the vocabulary is empty
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
