//! Damped power iteration
//!
//! Starting from a random probability vector, repeatedly applies the damped
//! transition matrix until the L2 change between two iterates drops to the
//! threshold. Because the damped matrix is column-stochastic, the L1 mass of
//! the vector is preserved across iterations.

use super::PageRankResult;
use crate::errors::{Result, TextRankError};
use crate::graph::transition::TransitionMatrix;
use crate::types::TextRankConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Power iteration ranker
#[derive(Debug, Clone)]
pub struct PowerIteration {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence threshold on the L2 change
    pub threshold: f64,
}

impl Default for PowerIteration {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-4,
        }
    }
}

impl PowerIteration {
    /// Create a new PowerIteration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Take damping, iteration cap and threshold from a config
    pub fn from_config(config: &TextRankConfig) -> Self {
        Self {
            damping: config.damping,
            max_iterations: config.max_iterations,
            threshold: config.convergence_threshold,
        }
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Run with a seeded generator, or an entropy-seeded one when `seed` is None
    pub fn run_seeded(
        &self,
        matrix: &TransitionMatrix,
        seed: Option<u64>,
    ) -> Result<PageRankResult> {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.run(matrix, &mut rng)
    }

    /// Run power iteration, drawing the initial vector from `rng`.
    ///
    /// Fails with [`TextRankError::ConvergenceFailure`] when the threshold is
    /// not reached within `max_iterations`, and with
    /// [`TextRankError::DegenerateGraph`] when a score is not finite.
    pub fn run<R: Rng + ?Sized>(
        &self,
        matrix: &TransitionMatrix,
        rng: &mut R,
    ) -> Result<PageRankResult> {
        let n = matrix.size();
        if n == 0 {
            return Ok(PageRankResult::new(vec![], 0, 0.0, true));
        }

        let mut scores = random_distribution(n, rng);
        let mut next = vec![0.0; n];
        let damped = matrix.damped(self.damping);

        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations {
            iterations += 1;

            damped.mul_vec_into(&scores, &mut next);
            delta = l2_distance(&scores, &next);
            std::mem::swap(&mut scores, &mut next);

            if delta <= self.threshold {
                break;
            }
        }

        if let Some(i) = scores.iter().position(|s| !s.is_finite()) {
            return Err(TextRankError::degenerate_graph(format!(
                "rank of phrase {i} is not a number"
            )));
        }

        let converged = delta <= self.threshold;

        #[cfg(feature = "tracing")]
        tracing::debug!(nodes = n, iterations, delta, converged, "power iteration finished");

        if !converged {
            return Err(TextRankError::convergence_failure(iterations, delta));
        }

        Ok(PageRankResult::new(scores, iterations, delta, converged))
    }
}

/// `n` uniform random values rescaled to unit L1 norm
fn random_distribution<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<f64> {
    let mut v: Vec<f64> = (0..n).map(|_| rng.gen::<f64>()).collect();
    let l1: f64 = v.iter().map(|x| x.abs()).sum();
    if l1 > 0.0 {
        v.iter_mut().for_each(|x| *x /= l1);
    } else {
        v.fill(1.0 / n as f64);
    }
    v
}

fn l2_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}
