//! # ngram_textrank
//!
//! Key-phrase extraction with a TextRank-style graph ranking over n-grams.
//!
//! The text is normalized into lowercase tokens and sliced into overlapping
//! windows of `ngram_length` tokens. Each window is encoded as a binary
//! vector over the stopword-free vocabulary, windows are connected by cosine
//! similarity, and the stationary distribution of a damped random walk over
//! that graph ranks them. The best windows are returned as key phrases.
//!
//! ```no_run
//! let phrases = ngram_textrank::extract_key_phrases(
//!     "the quick brown fox jumps over the lazy dog near the quick brown fox",
//!     4,
//! )?;
//! assert!(phrases.len() <= 5);
//! # Ok::<(), ngram_textrank::TextRankError>(())
//! ```

pub mod errors;
pub mod extractor;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod phrase;
pub mod types;

// Re-export commonly used types
pub use errors::{Result, TextRankError};
pub use types::{Phrase, TextRankConfig};

// Re-export main functionality
pub use extractor::{extract_key_phrases, ExtractionResult, KeyPhraseExtractor};
pub use graph::{matrix::SquareMatrix, similarity::SimilarityGraph, transition::TransitionMatrix};
pub use nlp::normalizer::Normalizer;
pub use nlp::stopwords::{remove_stopwords, StopwordFilter};
pub use nlp::vocabulary::Vocabulary;
pub use pagerank::{power::PowerIteration, PageRankResult};
pub use phrase::encoder::{PhraseEncoder, PhraseVector};
pub use phrase::ngrams::{ngrams, CandidatePhrase, PhraseGenerator};
pub use phrase::selector::select_top_n;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
