//! Background lexicon
//!
//! Maps words to a corpus-relative importance in `(0, 1]`. The source is a
//! word list ordered from most to least frequent; a word's importance is
//! its rank divided by `N + 1`, so rarer words score closer to 1. Words
//! absent from the table have importance 1.
//!
//! A lexicon is built once and shared read-only (typically behind an
//! `Arc`) by every summarization call.

use crate::errors::{DigestError, Result};
use rustc_hash::FxHashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Importance of any word not present in the lexicon
pub const DEFAULT_IMPORTANCE: f64 = 1.0;

/// Immutable word -> importance table
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    importance: FxHashMap<String, f64>,
}

impl Lexicon {
    /// A lexicon with no entries (every word has importance 1)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from words ordered most-frequent first
    ///
    /// Blank entries are skipped and do not consume a rank. A word listed
    /// more than once keeps its last rank.
    pub fn from_ranked_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ranks: FxHashMap<String, usize> = FxHashMap::default();
        let mut rank = 0usize;

        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            rank += 1;
            ranks.insert(word.to_string(), rank);
        }

        let denominator = (rank + 1) as f64;
        let importance = ranks
            .into_iter()
            .map(|(word, r)| (word, r as f64 / denominator))
            .collect();

        Self { importance }
    }

    /// Read a ranked word list, one word per line
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let lines = reader
            .lines()
            .collect::<std::io::Result<Vec<String>>>()
            .map_err(|e| DigestError::invalid_lexicon(format!("unreadable word list: {e}")))?;
        Ok(Self::from_ranked_words(lines))
    }

    /// Load a ranked word list from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| DigestError::io(path, e))?;
        let lexicon = Self::from_reader(BufReader::new(file))?;

        #[cfg(feature = "tracing")]
        tracing::debug!(path = %path.display(), words = lexicon.len(), "lexicon loaded");

        Ok(lexicon)
    }

    /// Build from explicit importance values
    ///
    /// Every value must lie in `(0, 1]`.
    pub fn from_scores<I, S>(scores: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut importance = FxHashMap::default();
        for (word, value) in scores {
            let word = word.into();
            if !(value > 0.0 && value <= 1.0) {
                return Err(DigestError::invalid_lexicon(format!(
                    "importance of '{word}' must be in (0, 1], got {value}"
                )));
            }
            importance.insert(word, value);
        }
        Ok(Self { importance })
    }

    /// Importance of a word, defaulting to 1 for unseen words
    #[inline]
    pub fn importance(&self, word: &str) -> f64 {
        self.importance
            .get(word)
            .copied()
            .unwrap_or(DEFAULT_IMPORTANCE)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.importance.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.importance.len()
    }

    pub fn is_empty(&self) -> bool {
        self.importance.is_empty()
    }
}
