//! Multi-factor sentence relevance
//!
//! Relevance is a weighted sum of four sub-scores:
//!
//! - **title**: lexicon-weighted cosine between the sentence and the title
//! - **keyword**: keyword strength (`sbfs`) times keyword clustering (`dbfs`)
//! - **length**: deviation from the ideal sentence length
//! - **position**: lead-biased bucket table
//!
//! When the caller supplies no keywords the keyword factor is dropped and
//! the sum is divided by the remaining weight.

use super::weights::WeightTable;
use crate::lexicon::Lexicon;
use crate::nlp::tokenizer::tokenize;
use crate::types::{KeywordDensityRule, Keywords, SummarizerConfig};

/// Density returned when exactly one keyword occurs
pub const SINGLE_KEYWORD_DENSITY: f64 = 1e-10;

/// Individual sub-scores of one sentence
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RelevanceBreakdown {
    pub title: f64,
    pub keyword: f64,
    pub length: f64,
    pub position: f64,
    /// Weighted combination
    pub total: f64,
}

/// Scores sentences against a title and keyword set
#[derive(Debug, Clone, Copy)]
pub struct RelevanceScorer<'a> {
    config: &'a SummarizerConfig,
    lexicon: &'a Lexicon,
}

impl<'a> RelevanceScorer<'a> {
    pub fn new(config: &'a SummarizerConfig, lexicon: &'a Lexicon) -> Self {
        Self { config, lexicon }
    }

    /// Relevance of every sentence
    ///
    /// `token_sets[i]` must be the tokenization of `sentences[i]`.
    pub fn score_all<S: AsRef<str>>(
        &self,
        sentences: &[S],
        token_sets: &[Vec<String>],
        title: &str,
        keywords: &Keywords,
    ) -> Vec<f64> {
        let title_tokens = tokenize(title);
        let count = sentences.len();

        sentences
            .iter()
            .zip(token_sets)
            .enumerate()
            .map(|(pos, (sentence, tokens))| {
                self.breakdown(sentence.as_ref(), tokens, &title_tokens, keywords, pos, count)
                    .total
            })
            .collect()
    }

    /// Relevance of one sentence with its sub-scores
    pub fn score_sentence(
        &self,
        sentence: &str,
        title: &str,
        keywords: &Keywords,
        pos: usize,
        sentence_count: usize,
    ) -> RelevanceBreakdown {
        self.breakdown(
            sentence,
            &tokenize(sentence),
            &tokenize(title),
            keywords,
            pos,
            sentence_count,
        )
    }

    fn breakdown(
        &self,
        sentence: &str,
        tokens: &[String],
        title_tokens: &[String],
        keywords: &Keywords,
        pos: usize,
        sentence_count: usize,
    ) -> RelevanceBreakdown {
        let weights = &self.config.weights;

        let title = title_score(tokens, title_tokens, self.lexicon);
        let keyword = keyword_score(sentence, keywords, self.config.density_rule);
        let length = length_score(tokens.len(), self.config.ideal_length);
        let position = position_score(pos, sentence_count, &self.config.position_table);

        let mut total = weights.title * title
            + weights.keyword * keyword
            + self.config.length_scoring.sign() * weights.length * length
            + weights.position * position;

        if keywords.is_empty() {
            total /= weights.without_keyword();
        }

        RelevanceBreakdown {
            title,
            keyword,
            length,
            position,
            total,
        }
    }
}

/// Cosine between a sentence and the title under a pair-local weight table
pub fn title_score(sentence_tokens: &[String], title_tokens: &[String], lexicon: &Lexicon) -> f64 {
    if title_tokens.is_empty() {
        return 0.0;
    }
    let table = WeightTable::build(&[sentence_tokens, title_tokens], lexicon);
    table.cosine(sentence_tokens, title_tokens)
}

/// Keyword strength times keyword clustering
pub fn keyword_score(sentence: &str, keywords: &Keywords, rule: KeywordDensityRule) -> f64 {
    sbfs(sentence, keywords) * dbfs(sentence, keywords, rule)
}

/// Keyword strength: summed keyword weight per character of the sentence
pub fn sbfs(sentence: &str, keywords: &Keywords) -> f64 {
    if sentence.is_empty() {
        return 0.0;
    }

    let sum: f64 = sentence
        .split_whitespace()
        .filter_map(|w| keywords.get(w))
        .sum();

    sum / sentence.chars().count() as f64
}

/// Keyword clustering: how close together keyword occurrences sit
pub fn dbfs(sentence: &str, keywords: &Keywords, rule: KeywordDensityRule) -> f64 {
    let mut keyword_count = 0usize;
    let mut sum = 0.0;
    let mut previous: Option<(usize, f64)> = None;

    for (i, word) in sentence.split_whitespace().enumerate() {
        let Some(&weight) = keywords.get(word) else {
            continue;
        };
        keyword_count += 1;

        match rule {
            KeywordDensityRule::Consecutive => {
                if let Some((last_index, last_weight)) = previous {
                    let distance = (i - last_index) as f64;
                    sum += last_weight * weight / (distance * distance);
                }
            }
            KeywordDensityRule::Literal => {
                // Only while the previous occurrence sits at index 0
                let (last_index, last_weight) = previous.unwrap_or((0, 0.0));
                if last_index == 0 && i != 0 {
                    let distance = i as f64;
                    sum += last_weight * weight / (distance * distance);
                }
            }
        }

        previous = Some((i, weight));
    }

    match keyword_count {
        0 => 0.0,
        1 => SINGLE_KEYWORD_DENSITY,
        n => sum / (n - 1) as f64,
    }
}

/// Relative deviation from the ideal length
pub fn length_score(word_count: usize, ideal_length: usize) -> f64 {
    let ideal = ideal_length as f64;
    (ideal - word_count as f64).abs() / ideal
}

/// Bucketed position prior
pub fn position_score(pos: usize, sentence_count: usize, table: &[f64]) -> f64 {
    if sentence_count == 0 {
        return 0.0;
    }
    let bucket = ((pos as f64 / sentence_count as f64) * 10.0).floor() as usize;
    table.get(bucket).copied().unwrap_or(0.0)
}
