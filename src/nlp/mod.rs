//! Text preparation
//!
//! This module provides normalization, stopword filtering and the
//! vocabulary used as the feature basis for phrase vectors.

pub mod normalizer;
pub mod stopwords;
pub mod vocabulary;
