//! Keyword weights from a reference text
//!
//! Turns a list of keywords into the weighted map `summarize` expects:
//! each keyword's weight is how often it occurs in a reference text,
//! scaled by its lexicon importance.

use crate::lexicon::Lexicon;
use crate::types::Keywords;

/// Weight each keyword by `occurrences(reference_text) * importance`
///
/// Occurrences are non-overlapping, case-sensitive substring matches.
/// Keywords that never occur are kept with weight 0.
pub fn keyword_weights<I, S>(reference_text: &str, keywords: I, lexicon: &Lexicon) -> Keywords
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    keywords
        .into_iter()
        .map(|keyword| {
            let keyword = keyword.as_ref();
            let occurrences = if keyword.is_empty() {
                0
            } else {
                reference_text.matches(keyword).count()
            };
            (
                keyword.to_string(),
                occurrences as f64 * lexicon.importance(keyword),
            )
        })
        .collect()
}
