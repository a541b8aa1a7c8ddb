//! MMR-based sentence selection for summarization
//!
//! Combines relevance and centrality into one score, prunes to a candidate
//! pool of the top `candidate_multiplier * summary_size` sentences, then
//! picks greedily by Maximal Marginal Relevance.

use super::quickselect::kth_largest;
use crate::graph::builder::SimilarityMatrix;

/// Configuration for sentence selection
#[derive(Debug, Clone)]
pub struct SelectorConfig {
    /// Lambda parameter for MMR (0 = diversity only, 1 = score only)
    pub lambda: f64,
    /// Candidate pool holds the top `candidate_multiplier * summary_size`
    pub candidate_multiplier: usize,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            lambda: 0.6,
            candidate_multiplier: 2,
        }
    }
}

/// Relevance and centrality merged onto one scale
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CombinedScores {
    /// Centrality rescaled so its maximum equals the maximum relevance
    pub scaled_centrality: Vec<f64>,
    /// `sqrt(relevance * scaled_centrality)`
    pub scores: Vec<f64>,
}

/// Combine relevance with centrality by geometric mean
///
/// A zero in either dimension collapses the combined score to zero.
pub fn combine_scores(relevance: &[f64], centrality: &[f64]) -> CombinedScores {
    let max_relevance = relevance.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let max_centrality = centrality.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let factor = if max_relevance > 0.0 && max_centrality > 0.0 {
        max_relevance / max_centrality
    } else {
        0.0
    };

    let scaled_centrality: Vec<f64> = centrality.iter().map(|c| c * factor).collect();
    let scores = relevance
        .iter()
        .zip(&scaled_centrality)
        .map(|(r, c)| (r * c).max(0.0).sqrt())
        .collect();

    CombinedScores {
        scaled_centrality,
        scores,
    }
}

/// A sentence chosen by the selector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    /// Sentence position
    pub index: usize,
    /// Combined score
    pub score: f64,
    /// MMR value when selected
    pub mmr: f64,
}

/// MMR-based sentence selector
#[derive(Debug, Default)]
pub struct SentenceSelector {
    config: SelectorConfig,
}

impl SentenceSelector {
    /// Create a new selector with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: SelectorConfig) -> Self {
        Self { config }
    }

    /// Set lambda (score vs diversity tradeoff)
    pub fn with_lambda(mut self, lambda: f64) -> Self {
        self.config.lambda = lambda.clamp(0.0, 1.0);
        self
    }

    /// Set the candidate pool multiplier
    pub fn with_candidate_multiplier(mut self, multiplier: usize) -> Self {
        self.config.candidate_multiplier = multiplier.max(1);
        self
    }

    /// Indices of the candidate pool, highest score first
    ///
    /// Holds every sentence scoring at least the k-th largest score, so
    /// ties at the boundary can make the pool larger than `k`. Equal
    /// scores keep document order.
    pub fn candidate_pool(&self, scores: &[f64], summary_size: usize) -> Vec<usize> {
        let all: Vec<usize> = (0..scores.len()).collect();
        self.candidate_pool_among(scores, &all, summary_size)
    }

    /// Candidate pool restricted to the `eligible` sentence indices
    ///
    /// `k` and the k-th largest score are taken over the eligible
    /// sentences only.
    pub fn candidate_pool_among(
        &self,
        scores: &[f64],
        eligible: &[usize],
        summary_size: usize,
    ) -> Vec<usize> {
        let k = eligible
            .len()
            .min(self.config.candidate_multiplier.saturating_mul(summary_size));

        let values: Vec<f64> = eligible.iter().map(|&i| scores[i]).collect();
        let Some(threshold) = kth_largest(&values, k) else {
            return Vec::new();
        };

        let mut pool: Vec<usize> = eligible
            .iter()
            .copied()
            .filter(|&i| scores[i] >= threshold)
            .collect();
        pool.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]).then(a.cmp(&b)));
        pool
    }

    /// Select up to `summary_size` sentences using MMR
    ///
    /// MMR formula: λ * score(s) - (1-λ) * max_{s' ∈ selected} sim(s, s')
    ///
    /// Stops early once no remaining candidate has a positive MMR value,
    /// so the result may be shorter than requested. Selections are
    /// returned in the order they were picked.
    pub fn select(
        &self,
        scores: &[f64],
        similarity: &SimilarityMatrix,
        summary_size: usize,
    ) -> Vec<Selection> {
        let all: Vec<usize> = (0..scores.len()).collect();
        self.select_among(scores, similarity, &all, summary_size)
    }

    /// MMR selection drawing candidates from `eligible` only
    ///
    /// Scores and similarities are still indexed by document position.
    pub fn select_among(
        &self,
        scores: &[f64],
        similarity: &SimilarityMatrix,
        eligible: &[usize],
        summary_size: usize,
    ) -> Vec<Selection> {
        let lambda = self.config.lambda;
        let mut remaining = self.candidate_pool_among(scores, eligible, summary_size);
        let mut chosen: Vec<usize> = Vec::with_capacity(summary_size);
        let mut selections = Vec::with_capacity(summary_size);

        while selections.len() < summary_size && !remaining.is_empty() {
            let mut best: Option<(usize, f64)> = None;
            let mut best_mmr = 0.0;

            for (slot, &candidate) in remaining.iter().enumerate() {
                let redundancy = similarity.max_similarity(candidate, &chosen);
                let mmr = lambda * scores[candidate] - (1.0 - lambda) * redundancy;

                if mmr > best_mmr {
                    best_mmr = mmr;
                    best = Some((slot, mmr));
                }
            }

            let Some((slot, mmr)) = best else {
                break;
            };

            let index = remaining.remove(slot);
            chosen.push(index);
            selections.push(Selection {
                index,
                score: scores[index],
                mmr,
            });
        }

        selections
    }
}
