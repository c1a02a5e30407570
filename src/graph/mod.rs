//! Phrase graph construction
//!
//! This module provides the dense matrix storage, the pairwise
//! similarity graph and its column-stochastic normalization.

pub mod matrix;
pub mod similarity;
pub mod transition;
