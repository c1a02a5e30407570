//! Phrase similarity graph
//!
//! Node i is the i-th candidate phrase; the weight of edge (i, j) is the
//! cosine similarity of their phrase vectors. Self-similarity is excluded so
//! that self-loops do not dominate the random walk.

use super::matrix::SquareMatrix;
use crate::phrase::encoder::PhraseVector;
use rayon::prelude::*;

/// Below this many phrases the pairwise pass runs sequentially
const PARALLEL_THRESHOLD: usize = 256;

/// Symmetric pairwise cosine-similarity matrix with a zero diagonal
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SimilarityGraph {
    matrix: SquareMatrix,
}

impl SimilarityGraph {
    /// Build the graph from phrase vectors.
    ///
    /// Each unordered pair is computed once and mirrored. Pairs involving an
    /// all-zero vector get similarity 0.
    pub fn build(vectors: &[PhraseVector]) -> Self {
        let n = vectors.len();
        let upper_row = |i: usize| -> Vec<f64> {
            vectors[i + 1..]
                .iter()
                .map(|other| vectors[i].cosine_similarity(other))
                .collect()
        };

        let upper: Vec<Vec<f64>> = if n < PARALLEL_THRESHOLD {
            (0..n).map(upper_row).collect()
        } else {
            (0..n).into_par_iter().map(upper_row).collect()
        };

        let mut matrix = SquareMatrix::zeros(n);
        for (i, row) in upper.into_iter().enumerate() {
            for (offset, sim) in row.into_iter().enumerate() {
                let j = i + 1 + offset;
                matrix.set(i, j, sim);
                matrix.set(j, i, sim);
            }
        }

        Self { matrix }
    }

    /// Wrap an existing matrix (used by tests and custom graphs)
    pub fn from_matrix(matrix: SquareMatrix) -> Self {
        Self { matrix }
    }

    /// Similarity between phrases `i` and `j`
    pub fn similarity(&self, i: usize, j: usize) -> f64 {
        self.matrix.get(i, j)
    }

    /// Number of phrases (N)
    pub fn num_nodes(&self) -> usize {
        self.matrix.size()
    }

    /// Phrases with no similarity to any other phrase
    pub fn isolated_nodes(&self) -> Vec<usize> {
        self.matrix
            .row_sums()
            .into_iter()
            .enumerate()
            .filter(|(_, sum)| *sum <= 0.0)
            .map(|(i, _)| i)
            .collect()
    }

    /// The underlying matrix
    pub fn matrix(&self) -> &SquareMatrix {
        &self.matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vectors(sets: &[&[u32]], dim: usize) -> Vec<PhraseVector> {
        sets.iter()
            .map(|s| PhraseVector::from_indices(dim, s.iter().copied()))
            .collect()
    }

    #[test]
    fn test_build_symmetric_zero_diagonal() {
        let vecs = vectors(&[&[0, 1], &[1, 2], &[0, 1], &[3]], 4);
        let graph = SimilarityGraph::build(&vecs);

        assert_eq!(graph.num_nodes(), 4);
        assert!(graph.matrix().is_symmetric(0.0));
        for i in 0..4 {
            assert_eq!(graph.similarity(i, i), 0.0);
        }
        assert!((graph.similarity(0, 2) - 1.0).abs() < 1e-12);
        assert!((graph.similarity(0, 1) - 0.5).abs() < 1e-12);
        assert_eq!(graph.similarity(0, 3), 0.0);
    }

    #[test]
    fn test_isolated_nodes() {
        let vecs = vectors(&[&[0], &[0], &[1], &[]], 2);
        let graph = SimilarityGraph::build(&vecs);
        assert_eq!(graph.isolated_nodes(), vec![2, 3]);
        assert!(graph.matrix().is_finite());
    }

    #[test]
    fn test_parallel_path_matches_pairwise() {
        let n = PARALLEL_THRESHOLD + 10;
        let vecs: Vec<PhraseVector> = (0..n as u32)
            .map(|i| PhraseVector::from_indices(8, [i % 8, (i / 8) % 8]))
            .collect();
        let graph = SimilarityGraph::build(&vecs);

        assert_eq!(graph.num_nodes(), n);
        assert!(graph.matrix().is_symmetric(0.0));
        for (i, j) in [(0, 1), (3, 200), (17, n - 1)] {
            assert_eq!(graph.similarity(i, j), vecs[i].cosine_similarity(&vecs[j]));
        }
    }

    #[test]
    fn test_empty_and_single() {
        assert_eq!(SimilarityGraph::build(&[]).num_nodes(), 0);

        let single = SimilarityGraph::build(&vectors(&[&[0]], 1));
        assert_eq!(single.num_nodes(), 1);
        assert_eq!(single.isolated_nodes(), vec![0]);
    }
}
