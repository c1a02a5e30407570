//! Phrase candidates
//!
//! This module provides n-gram window generation, the binary
//! vocabulary encoding of each window and top-K selection.

pub mod encoder;
pub mod ngrams;
pub mod selector;
