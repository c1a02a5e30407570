//! Column-stochastic transition matrix
//!
//! Column j of the transition matrix is the distribution of where rank mass
//! at phrase j flows in one step of the walk.

use super::matrix::SquareMatrix;
use super::similarity::SimilarityGraph;
use crate::errors::{Result, TextRankError};

/// Column sums must be within this of 1 to count as stochastic
const STOCHASTIC_TOLERANCE: f64 = 1e-9;

/// A column-stochastic matrix
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionMatrix {
    matrix: SquareMatrix,
}

impl TransitionMatrix {
    /// Normalize a similarity graph into a transition matrix
    pub fn from_similarity(graph: &SimilarityGraph) -> Result<Self> {
        Self::from_matrix(graph.matrix())
    }

    /// Rescale every column of a non-negative weight matrix to sum to 1.
    ///
    /// The matrix is transposed, each row divided by its sum, and the result
    /// transposed back. A single node has nowhere to send its mass and gets a
    /// self-loop. Any other zero column is an isolated phrase and fails with
    /// [`TextRankError::DegenerateGraph`].
    pub fn from_matrix(weights: &SquareMatrix) -> Result<Self> {
        let n = weights.size();
        if n == 1 {
            return Ok(Self {
                matrix: SquareMatrix::filled(1, 1.0),
            });
        }

        let mut by_source = weights.transpose();
        for i in 0..n {
            let row = by_source.row_mut(i);
            let sum: f64 = row.iter().sum();
            if !sum.is_finite() || sum <= 0.0 {
                return Err(TextRankError::degenerate_graph(format!(
                    "phrase {i} has no similarity to any other phrase"
                )));
            }
            for x in row.iter_mut() {
                *x /= sum;
            }
        }

        Ok(Self {
            matrix: by_source.transpose(),
        })
    }

    /// The damped walk `d * M + (1 - d) / N * J`.
    ///
    /// Still column-stochastic for any `d` in `[0, 1]`.
    pub fn damped(&self, damping: f64) -> SquareMatrix {
        let n = self.matrix.size();
        if n == 0 {
            return SquareMatrix::zeros(0);
        }
        self.matrix.affine(damping, (1.0 - damping) / n as f64)
    }

    /// Number of nodes (N)
    pub fn size(&self) -> usize {
        self.matrix.size()
    }

    /// Transition probability from node `j` to node `i`
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.matrix.get(i, j)
    }

    /// Check that every column sums to 1
    pub fn is_column_stochastic(&self) -> bool {
        self.matrix
            .column_sums()
            .iter()
            .all(|s| (s - 1.0).abs() <= STOCHASTIC_TOLERANCE)
    }

    /// The underlying matrix
    pub fn matrix(&self) -> &SquareMatrix {
        &self.matrix
    }
}
