//! Binary phrase vectors
//!
//! A phrase vector has one entry per vocabulary term: 1 if the term occurs
//! anywhere in the space-joined phrase text, 0 otherwise. Matching is by
//! substring, so "cat" is present in "concatenate". Only the set positions are stored,
//! sorted ascending, so dot products are a merge of two sorted lists.

use super::ngrams::CandidatePhrase;
use crate::nlp::vocabulary::Vocabulary;

/// A binary membership vector over a vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PhraseVector {
    /// Vector length (V)
    dim: usize,
    /// Positions set to 1, sorted and unique
    ones: Vec<u32>,
}

impl PhraseVector {
    /// Build a vector of length `dim` from the positions set to 1
    pub fn from_indices(dim: usize, indices: impl IntoIterator<Item = u32>) -> Self {
        let mut ones: Vec<u32> = indices
            .into_iter()
            .filter(|&i| (i as usize) < dim)
            .collect();
        ones.sort_unstable();
        ones.dedup();
        Self { dim, ones }
    }

    /// Encode the space-joined `text` of a phrase against `vocab`
    pub fn encode(vocab: &Vocabulary, text: &str) -> Self {
        let ones = vocab
            .terms()
            .iter()
            .zip(0u32..)
            .filter(|(term, _)| text.contains(term.as_str()))
            .map(|(_, id)| id)
            .collect();
        // Terms are visited in id order, so `ones` is already sorted and unique.
        Self {
            dim: vocab.len(),
            ones,
        }
    }

    /// Vector length (V)
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Positions set to 1
    pub fn ones(&self) -> &[u32] {
        &self.ones
    }

    /// Entry at `index`
    pub fn get(&self, index: usize) -> bool {
        u32::try_from(index)
            .map(|i| self.ones.binary_search(&i).is_ok())
            .unwrap_or(false)
    }

    /// Check if every entry is 0
    pub fn is_zero(&self) -> bool {
        self.ones.is_empty()
    }

    /// Euclidean magnitude
    pub fn magnitude(&self) -> f64 {
        (self.ones.len() as f64).sqrt()
    }

    /// Dot product (number of shared terms)
    pub fn dot(&self, other: &Self) -> f64 {
        let (mut i, mut j, mut shared) = (0, 0, 0usize);
        while i < self.ones.len() && j < other.ones.len() {
            match self.ones[i].cmp(&other.ones[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    shared += 1;
                    i += 1;
                    j += 1;
                }
            }
        }
        shared as f64
    }

    /// Cosine similarity; 0 when either vector is all zeros
    pub fn cosine_similarity(&self, other: &Self) -> f64 {
        if self.is_zero() || other.is_zero() {
            return 0.0;
        }
        self.dot(other) / (self.magnitude() * other.magnitude())
    }

    /// Dense 0/1 representation of length V
    pub fn to_dense(&self) -> Vec<f64> {
        let mut dense = vec![0.0; self.dim];
        for &i in &self.ones {
            dense[i as usize] = 1.0;
        }
        dense
    }
}

/// Encodes candidate phrases as vectors over a fixed vocabulary
#[derive(Debug, Clone, Copy)]
pub struct PhraseEncoder<'v> {
    vocab: &'v Vocabulary,
}

impl<'v> PhraseEncoder<'v> {
    /// Create an encoder for `vocab`
    pub fn new(vocab: &'v Vocabulary) -> Self {
        Self { vocab }
    }

    /// Encode one phrase
    pub fn encode(&self, phrase: &CandidatePhrase) -> PhraseVector {
        PhraseVector::encode(self.vocab, &phrase.text)
    }

    /// Encode every phrase, preserving order
    pub fn encode_all(&self, phrases: &[CandidatePhrase]) -> Vec<PhraseVector> {
        phrases.iter().map(|p| self.encode(p)).collect()
    }
}
