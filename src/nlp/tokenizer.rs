//! Word tokenization
//!
//! Strips ASCII punctuation, lowercases and splits on whitespace. There is
//! no stemming and no stopword removal; every surviving word counts.

/// Stateless word tokenizer
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Tokenize a sentence into lowercase words
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        tokenize(text)
    }

    /// Tokenize every sentence, preserving order
    pub fn tokenize_all<S: AsRef<str>>(&self, sentences: &[S]) -> Vec<Vec<String>> {
        sentences.iter().map(|s| tokenize(s.as_ref())).collect()
    }
}

/// Tokenize a sentence into lowercase, punctuation-free words
pub fn tokenize(text: &str) -> Vec<String> {
    let stripped: String = text
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();

    stripped
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
