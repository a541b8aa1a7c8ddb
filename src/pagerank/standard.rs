//! Standard PageRank algorithm
//!
//! Random-surfer PageRank by power iteration on a weighted, row-normalized
//! similarity graph. Sink rows teleport uniformly.

use super::PageRankResult;
use crate::graph::csr::CsrGraph;

/// Standard PageRank implementation
#[derive(Debug, Clone)]
pub struct StandardPageRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence threshold on the L1 change between iterations
    pub threshold: f64,
}

impl Default for StandardPageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-3,
        }
    }
}

impl StandardPageRank {
    /// Create a new StandardPageRank with default settings
    pub fn new() -> Self {
        Self::default()
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

    /// Run PageRank on a graph
    ///
    /// Each step computes
    /// `r'_i = sum_j r_j * (P[j][i] * s + sink_j * s / n + (1 - s) / n)`.
    /// Returns the result even if convergence wasn't achieved, with
    /// `converged=false`.
    pub fn run(&self, graph: &CsrGraph) -> PageRankResult {
        if graph.is_empty() {
            return PageRankResult::new(vec![], 0, 0.0, true);
        }
        let n = graph.num_nodes;

        // Initialize scores uniformly
        let initial_score = 1.0 / n as f64;
        let mut scores = vec![initial_score; n];
        let mut new_scores = vec![0.0; n];

        let sink_nodes = graph.sink_nodes();

        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta > self.threshold {
            iterations += 1;

            let total_mass: f64 = scores.iter().sum();
            let sink_mass: f64 = sink_nodes.iter().map(|&d| scores[d as usize]).sum();

            let teleport = (1.0 - self.damping) * total_mass / n as f64;
            let sink_contribution = self.damping * sink_mass / n as f64;

            new_scores.fill(teleport + sink_contribution);

            // Propagate scores through edges
            for (node, &node_score) in scores.iter().enumerate() {
                let total_weight = graph.node_total_weight(node as u32);

                if total_weight > 0.0 {
                    for (neighbor, weight) in graph.neighbors(node as u32) {
                        let contribution = self.damping * node_score * weight / total_weight;
                        new_scores[neighbor as usize] += contribution;
                    }
                }
            }

            // Calculate convergence delta (L1 norm)
            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            std::mem::swap(&mut scores, &mut new_scores);
        }

        let converged = delta <= self.threshold;

        #[cfg(feature = "tracing")]
        if !converged {
            tracing::warn!(
                iterations,
                delta,
                threshold = self.threshold,
                "pagerank hit its iteration cap; using best-effort ranks"
            );
        }

        // Normalize scores (they should already sum to ~1, but ensure numerical stability)
        let sum: f64 = scores.iter().sum();
        if sum > 0.0 {
            for score in &mut scores {
                *score /= sum;
            }
        }

        PageRankResult::new(scores, iterations, delta, converged)
    }
}
