//! Sentence similarity matrix construction
//!
//! Builds one [`WeightTable`] over every sentence of the document and
//! compares all pairs, self-pairs included. Only the upper triangle is
//! computed; it is mirrored so the matrix is exactly symmetric.

use crate::lexicon::Lexicon;
use crate::nlp::tokenizer::tokenize;
use crate::summarizer::weights::{TermVector, WeightTable};
use rayon::prelude::*;

/// Dense, symmetric `n x n` similarity matrix with entries in `[0, 1]`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimilarityMatrix {
    size: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// An `n x n` matrix of zeros
    pub fn zeros(size: usize) -> Self {
        Self {
            size,
            values: vec![0.0; size * size],
        }
    }

    /// Build from a pairwise function evaluated on `i <= j` only
    ///
    /// Values are clamped into `[0, 1]`.
    pub fn from_fn(size: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut matrix = Self::zeros(size);
        for i in 0..size {
            for j in i..size {
                matrix.set_pair(i, j, f(i, j));
            }
        }
        matrix
    }

    fn from_upper_rows(size: usize, rows: Vec<Vec<f64>>) -> Self {
        let mut matrix = Self::zeros(size);
        for (i, row) in rows.into_iter().enumerate() {
            for (offset, value) in row.into_iter().enumerate() {
                matrix.set_pair(i, i + offset, value);
            }
        }
        matrix
    }

    fn set_pair(&mut self, i: usize, j: usize, value: f64) {
        let value = clamp_unit(value);
        self.values[i * self.size + j] = value;
        self.values[j * self.size + i] = value;
    }

    /// Similarity between sentences `i` and `j`
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.size + j]
    }

    /// Row `i` as a slice
    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.size..(i + 1) * self.size]
    }

    /// Sum of row `i`
    pub fn row_sum(&self, i: usize) -> f64 {
        self.row(i).iter().sum()
    }

    /// Largest similarity between `i` and any of `others` (0 if none)
    pub fn max_similarity(&self, i: usize, others: &[usize]) -> f64 {
        others
            .iter()
            .map(|&j| self.get(i, j))
            .fold(0.0, f64::max)
    }

    /// Number of sentences
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Check exact symmetry
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| (i..self.size).all(|j| self.get(i, j) == self.get(j, i)))
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Builds similarity matrices against a shared lexicon
#[derive(Debug, Clone, Copy)]
pub struct SimilarityBuilder<'a> {
    lexicon: &'a Lexicon,
    parallel_threshold: usize,
}

impl<'a> SimilarityBuilder<'a> {
    /// Create a builder (parallel above 64 sentences)
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self {
            lexicon,
            parallel_threshold: 64,
        }
    }

    /// Set the sentence count at which rows are computed in parallel
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Build the matrix from pre-tokenized sentences
    pub fn build(&self, token_sets: &[Vec<String>]) -> SimilarityMatrix {
        let n = token_sets.len();
        let table = WeightTable::build(token_sets, self.lexicon);
        let vectors: Vec<TermVector> = token_sets
            .iter()
            .map(|tokens| TermVector::new(tokens, &table))
            .collect();

        let upper_row = |i: usize| -> Vec<f64> {
            (i..n)
                .map(|j| vectors[i].cosine_similarity(&vectors[j]))
                .collect()
        };

        // For small documents, sequential is faster
        let rows: Vec<Vec<f64>> = if n >= self.parallel_threshold.max(1) {
            (0..n).into_par_iter().map(upper_row).collect()
        } else {
            (0..n).map(upper_row).collect()
        };

        SimilarityMatrix::from_upper_rows(n, rows)
    }
}

/// Tokenize raw sentences and build their similarity matrix
pub fn similarity_matrix<S: AsRef<str>>(sentences: &[S], lexicon: &Lexicon) -> SimilarityMatrix {
    let token_sets: Vec<Vec<String>> = sentences.iter().map(|s| tokenize(s.as_ref())).collect();
    SimilarityBuilder::new(lexicon).build(&token_sets)
}
