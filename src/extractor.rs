//! End-to-end key-phrase extraction
//!
//! Runs the stages in order: normalize, build the vocabulary, generate
//! n-gram candidates, encode them, build and normalize the similarity graph,
//! rank with damped power iteration, select the top phrases.

use crate::errors::{Result, TextRankError};
use crate::graph::similarity::SimilarityGraph;
use crate::graph::transition::TransitionMatrix;
use crate::nlp::normalizer::Normalizer;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::vocabulary::Vocabulary;
use crate::pagerank::power::PowerIteration;
use crate::phrase::encoder::PhraseEncoder;
use crate::phrase::ngrams::PhraseGenerator;
use crate::phrase::selector::select_top_n;
use crate::types::{Phrase, TextRankConfig};
use serde::{Deserialize, Serialize};

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

/// Ranked phrases plus power-iteration diagnostics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Top phrases, best first
    pub phrases: Vec<Phrase>,
    /// Whether power iteration converged
    pub converged: bool,
    /// Number of power iterations performed
    pub iterations: usize,
    /// Final L2 change of the rank vector
    pub delta: f64,
}

impl ExtractionResult {
    /// The phrase strings, best first
    pub fn texts(&self) -> Vec<String> {
        self.phrases.iter().map(|p| p.text.clone()).collect()
    }
}

/// N-gram TextRank key-phrase extractor
#[derive(Debug, Clone)]
pub struct KeyPhraseExtractor {
    config: TextRankConfig,
    normalizer: Normalizer,
    stopwords: StopwordFilter,
}

impl Default for KeyPhraseExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyPhraseExtractor {
    /// Create a new extractor with default config
    pub fn new() -> Self {
        Self::with_config(TextRankConfig::default())
    }

    /// Create with custom config
    pub fn with_config(config: TextRankConfig) -> Self {
        let mut stopwords = StopwordFilter::new(&config.language);
        stopwords.add_stopwords(&config.stopwords);
        Self {
            config,
            normalizer: Normalizer::new(),
            stopwords,
        }
    }

    /// Replace the stopword filter
    pub fn with_stopword_filter(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// The active configuration
    pub fn config(&self) -> &TextRankConfig {
        &self.config
    }

    /// Extract the top phrase strings from `content`
    pub fn extract(&self, content: &str) -> Result<Vec<String>> {
        Ok(self.extract_with_info(content)?.texts())
    }

    /// Extract scored phrases with convergence information
    pub fn extract_with_info(&self, content: &str) -> Result<ExtractionResult> {
        self.config.validate()?;

        let tokens = {
            trace_stage!("normalize");
            self.normalizer.tokenize(content)
        };

        let vocab = {
            trace_stage!("vocabulary");
            Vocabulary::build(&tokens, &self.stopwords)
        };

        let candidates = {
            trace_stage!("phrases");
            PhraseGenerator::new(self.config.ngram_length).generate(&tokens)?
        };

        if let Some(limit) = self.config.max_phrases {
            if candidates.len() > limit {
                return Err(TextRankError::input_too_large(candidates.len(), limit));
            }
        }

        let vectors = {
            trace_stage!("encode");
            PhraseEncoder::new(&vocab).encode_all(&candidates)
        };

        let graph = {
            trace_stage!("graph");
            SimilarityGraph::build(&vectors)
        };

        let transition = {
            trace_stage!("normalize_graph");
            TransitionMatrix::from_similarity(&graph)?
        };

        let pagerank = {
            trace_stage!("rank");
            PowerIteration::from_config(&self.config).run_seeded(&transition, self.config.seed)?
        };

        let phrases = {
            trace_stage!("select");
            select_top_n(&candidates, &pagerank.scores, self.config.top_n)
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            tokens = tokens.len(),
            vocabulary = vocab.len(),
            candidates = candidates.len(),
            selected = phrases.len(),
            "key phrases extracted"
        );

        Ok(ExtractionResult {
            phrases,
            converged: pagerank.converged,
            iterations: pagerank.iterations,
            delta: pagerank.delta,
        })
    }
}

/// Extract up to five key phrases of `ngram_length` tokens from `content`
pub fn extract_key_phrases(content: &str, ngram_length: usize) -> Result<Vec<String>> {
    let config = TextRankConfig::default().with_ngram_length(ngram_length);
    KeyPhraseExtractor::with_config(config).extract(content)
}
