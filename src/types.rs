//! Core types for rapid_digest
//!
//! This module defines the document model, the summarizer configuration and
//! the detailed summary result.

use crate::errors::{DigestError, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Caller-supplied keyword weights (surface word -> weight)
pub type Keywords = FxHashMap<String, f64>;

// ============================================================================
// Document
// ============================================================================

/// A document ready for summarization.
///
/// Sentence position is its index in `sentences`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document title (may be empty)
    #[serde(default)]
    pub title: String,
    /// Sentences in document order
    pub sentences: Vec<String>,
    /// Keyword weights (may be empty)
    #[serde(default)]
    pub keywords: Keywords,
}

impl Document {
    /// Create a document with no title and no keywords
    pub fn new(sentences: Vec<String>) -> Self {
        Self {
            title: String::new(),
            sentences,
            keywords: Keywords::default(),
        }
    }

    /// Builder method: set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builder method: set the keyword weights
    pub fn with_keywords(mut self, keywords: Keywords) -> Self {
        self.keywords = keywords;
        self
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

// ============================================================================
// Scoring options
// ============================================================================

/// How the length deviation enters the relevance sum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthScoring {
    /// Add `|ideal - words| / ideal` with a positive coefficient.
    ///
    /// Sentences far from the ideal length score higher under this rule.
    #[default]
    Deviation,
    /// Subtract the deviation instead.
    Penalty,
}

impl LengthScoring {
    /// Signed multiplier applied to the deviation
    pub fn sign(self) -> f64 {
        match self {
            LengthScoring::Deviation => 1.0,
            LengthScoring::Penalty => -1.0,
        }
    }
}

/// Which keyword pairs feed the clustering (density) term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordDensityRule {
    /// Every consecutive pair of keyword occurrences contributes
    /// `prev * curr / distance^2`; the first occurrence contributes 0.
    #[default]
    Consecutive,
    /// Only pairs whose previous occurrence is at word index 0 contribute.
    Literal,
}

/// Coefficients of the four relevance factors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactorWeights {
    pub title: f64,
    pub keyword: f64,
    pub length: f64,
    pub position: f64,
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            title: 0.25,
            keyword: 0.4,
            length: 0.1,
            position: 0.25,
        }
    }
}

impl FactorWeights {
    /// Divisor applied when the caller supplies no keywords
    pub fn without_keyword(&self) -> f64 {
        1.0 - self.keyword
    }

    fn iter(&self) -> [(&'static str, f64); 4] {
        [
            ("title", self.title),
            ("keyword", self.keyword),
            ("length", self.length),
            ("position", self.position),
        ]
    }
}

/// Lead-biased distribution of important sentences in news-style writing
pub const DEFAULT_POSITION_TABLE: [f64; 11] =
    [0.17, 0.23, 0.14, 0.08, 0.05, 0.04, 0.06, 0.04, 0.04, 0.15, 0.0];

fn default_position_table() -> Vec<f64> {
    DEFAULT_POSITION_TABLE.to_vec()
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for summarization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Damping factor for PageRank
    pub damping: f64,
    /// Maximum PageRank iterations before returning best-effort ranks
    pub max_iterations: usize,
    /// L1 convergence threshold for PageRank
    pub convergence_threshold: f64,
    /// MMR trade-off (1 = score only, 0 = diversity only)
    pub lambda: f64,
    /// Candidate pool size is `candidate_multiplier * summary_size`
    pub candidate_multiplier: usize,
    /// Ideal sentence length in words
    pub ideal_length: usize,
    /// Relevance factor coefficients
    pub weights: FactorWeights,
    /// Position buckets, indexed by `floor(pos / count * 10)`
    #[serde(default = "default_position_table")]
    pub position_table: Vec<f64>,
    /// Sign of the length term
    pub length_scoring: LengthScoring,
    /// Keyword clustering rule
    pub density_rule: KeywordDensityRule,
    /// Sentence count at which similarity rows are computed in parallel
    pub parallel_threshold: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            convergence_threshold: 1e-3,
            lambda: 0.6,
            candidate_multiplier: 2,
            ideal_length: 20,
            weights: FactorWeights::default(),
            position_table: default_position_table(),
            length_scoring: LengthScoring::Deviation,
            density_rule: KeywordDensityRule::Consecutive,
            parallel_threshold: 64,
        }
    }
}

impl SummarizerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON; omitted fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| DigestError::io(path, e))?;
        Self::from_json_str(&json)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(DigestError::invalid_config(format!(
                "damping must be between 0 and 1 (exclusive), got {}",
                self.damping
            )));
        }

        if self.max_iterations == 0 {
            return Err(DigestError::invalid_config("max_iterations must be > 0"));
        }

        if !(self.convergence_threshold > 0.0) {
            return Err(DigestError::invalid_config(
                "convergence_threshold must be > 0",
            ));
        }

        if !(0.0..=1.0).contains(&self.lambda) {
            return Err(DigestError::invalid_config(format!(
                "lambda must be between 0 and 1, got {}",
                self.lambda
            )));
        }

        if self.candidate_multiplier == 0 {
            return Err(DigestError::invalid_config(
                "candidate_multiplier must be > 0",
            ));
        }

        if self.ideal_length == 0 {
            return Err(DigestError::invalid_config("ideal_length must be > 0"));
        }

        for (name, weight) in self.weights.iter() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(DigestError::invalid_config(format!(
                    "{name} weight must be a non-negative number, got {weight}"
                )));
            }
        }

        if self.weights.keyword >= 1.0 {
            return Err(DigestError::invalid_config(
                "keyword weight must be < 1 so the no-keyword divisor stays positive",
            ));
        }

        if self.position_table.is_empty() {
            return Err(DigestError::invalid_config("position_table must not be empty"));
        }

        if self
            .position_table
            .iter()
            .any(|v| !v.is_finite() || *v < 0.0)
        {
            return Err(DigestError::invalid_config(
                "position_table entries must be non-negative numbers",
            ));
        }

        Ok(())
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: set max iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Builder method: set convergence threshold
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Builder method: set MMR lambda
    pub fn with_lambda(mut self, lambda: f64) -> Self {
        self.lambda = lambda;
        self
    }

    /// Builder method: set the candidate pool multiplier
    pub fn with_candidate_multiplier(mut self, multiplier: usize) -> Self {
        self.candidate_multiplier = multiplier;
        self
    }

    /// Builder method: set the ideal sentence length
    pub fn with_ideal_length(mut self, ideal_length: usize) -> Self {
        self.ideal_length = ideal_length;
        self
    }

    /// Builder method: set relevance factor weights
    pub fn with_weights(mut self, weights: FactorWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Builder method: set the length scoring rule
    pub fn with_length_scoring(mut self, scoring: LengthScoring) -> Self {
        self.length_scoring = scoring;
        self
    }

    /// Builder method: set the keyword density rule
    pub fn with_density_rule(mut self, rule: KeywordDensityRule) -> Self {
        self.density_rule = rule;
        self
    }

    /// Builder method: set the parallel similarity threshold
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }
}

// ============================================================================
// Result
// ============================================================================

/// A selected sentence with the scores that got it chosen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedSentence {
    /// Sentence text
    pub text: String,
    /// Position in the input
    pub index: usize,
    /// Relevance score
    pub relevance: f64,
    /// Centrality rescaled to the relevance range
    pub centrality: f64,
    /// Geometric mean of relevance and scaled centrality
    pub score: f64,
    /// MMR value at the moment of selection
    pub mmr: f64,
}

/// Detailed summarization output, sentences in selection order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub sentences: Vec<SelectedSentence>,
    /// PageRank iterations performed (0 when scoring was skipped)
    pub iterations: usize,
    /// Whether PageRank converged within its iteration cap
    pub converged: bool,
}

impl SummaryResult {
    /// Sentence texts in selection order
    pub fn texts(&self) -> Vec<String> {
        self.sentences.iter().map(|s| s.text.clone()).collect()
    }

    /// Sentence texts re-sorted into document order
    pub fn in_document_order(&self) -> Vec<String> {
        let mut ordered: Vec<_> = self.sentences.iter().collect();
        ordered.sort_by_key(|s| s.index);
        ordered.into_iter().map(|s| s.text.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}
