//! Sentence splitting
//!
//! A punctuation heuristic for callers that hold raw article text. Splits
//! on whitespace following `.` or `?`, except after initialisms (`e.g.`,
//! `U.S.`) and short title abbreviations (`Mr.`, `Dr.`). Newlines are
//! treated as spaces.

/// Split raw text into trimmed, non-empty sentences
pub fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<char> = text
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();

    let mut sentences = Vec::new();
    let mut start = 0;

    for i in 1..chars.len() {
        if !chars[i].is_whitespace() || !matches!(chars[i - 1], '.' | '?') {
            continue;
        }
        if is_initialism(&chars, i) || is_title_abbreviation(&chars, i) {
            continue;
        }

        push_trimmed(&mut sentences, &chars[start..i]);
        start = i + 1;
    }

    if start < chars.len() {
        push_trimmed(&mut sentences, &chars[start..]);
    }

    sentences
}

fn push_trimmed(sentences: &mut Vec<String>, piece: &[char]) {
    let piece: String = piece.iter().collect();
    let trimmed = piece.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// `w.w.` immediately before the boundary at `i`
fn is_initialism(chars: &[char], i: usize) -> bool {
    i >= 4 && is_word_char(chars[i - 4]) && chars[i - 3] == '.' && is_word_char(chars[i - 2])
}

/// `Xy.` immediately before the boundary at `i`
fn is_title_abbreviation(chars: &[char], i: usize) -> bool {
    i >= 3 && chars[i - 3].is_uppercase() && chars[i - 2].is_lowercase() && chars[i - 1] == '.'
}
