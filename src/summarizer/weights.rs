//! Lexicon-weighted term vectors for sentences
//!
//! A [`WeightTable`] assigns every word of the compared unit one global
//! weight: its raw count across all token sets times its lexicon
//! importance. Sentences are then compared as word *sets*: the only
//! per-sentence information is whether a word is present.

use crate::lexicon::Lexicon;
use rustc_hash::FxHashMap;

/// Word -> weight table shared by every member of one comparison
#[derive(Debug, Clone, Default)]
pub struct WeightTable {
    weights: FxHashMap<String, f64>,
}

impl WeightTable {
    /// Count words across all token sets and scale by lexicon importance
    pub fn build<T: AsRef<[String]>>(token_sets: &[T], lexicon: &Lexicon) -> Self {
        let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
        for tokens in token_sets {
            for token in tokens.as_ref() {
                *counts.entry(token.as_str()).or_insert(0) += 1;
            }
        }

        let weights = counts
            .into_iter()
            .map(|(word, count)| (word.to_string(), count as f64 * lexicon.importance(word)))
            .collect();

        Self { weights }
    }

    /// Weight of a word (0 if the word never occurred)
    #[inline]
    pub fn weight(&self, word: &str) -> f64 {
        self.weights.get(word).copied().unwrap_or(0.0)
    }

    /// Cosine similarity of two token sequences treated as sets
    pub fn cosine(&self, a: &[String], b: &[String]) -> f64 {
        TermVector::new(a, self).cosine_similarity(&TermVector::new(b, self))
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// A sentence's distinct words with their squared weights
#[derive(Debug, Clone, Default)]
pub struct TermVector {
    /// word -> weight^2
    pub dimensions: FxHashMap<String, f64>,
    /// L2 norm over the distinct words
    pub norm: f64,
}

impl TermVector {
    /// Build the vector for one token sequence
    pub fn new(tokens: &[String], table: &WeightTable) -> Self {
        let mut dimensions: FxHashMap<String, f64> = FxHashMap::default();
        for token in tokens {
            if !dimensions.contains_key(token.as_str()) {
                let w = table.weight(token);
                dimensions.insert(token.clone(), w * w);
            }
        }
        let norm = dimensions.values().sum::<f64>().sqrt();
        Self { dimensions, norm }
    }

    /// Cosine similarity; 0 when either side has no weighted words
    pub fn cosine_similarity(&self, other: &TermVector) -> f64 {
        let denominator = self.norm * other.norm;
        if denominator <= 0.0 {
            return 0.0;
        }

        let (small, large) = if self.dimensions.len() <= other.dimensions.len() {
            (self, other)
        } else {
            (other, self)
        };

        let dot: f64 = small
            .dimensions
            .iter()
            .filter(|(word, _)| large.dimensions.contains_key(word.as_str()))
            .map(|(_, squared)| squared)
            .sum();

        dot / denominator
    }

    /// Check if the vector is empty
    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }
}
