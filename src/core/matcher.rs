//! Fuzzy subsequence matching against a single text field.
//!
//! The matcher walks the text once, left to right, and consumes query
//! characters greedily. Every matched character earns:
//!
//! ```text
//! consecutive  5, 10, 15, ... for each extra character of an unbroken run
//! boundary     +10 at the start of the text or after a separator
//! position     max(0, 20 - offset)
//! ```
//!
//! A query that equals the whole text (ignoring case) earns another +100.
//! Offsets are character offsets into the original text, not byte offsets.

/// Increment added to the running bonus for each consecutive match.
const CONSECUTIVE_STEP: i64 = 5;

/// Flat bonus for matching the first character of a word.
const WORD_BOUNDARY_BONUS: i64 = 10;

/// Matches at offsets below this window earn `window - offset`.
const POSITION_WINDOW: i64 = 20;

/// Bonus for a query equal to the entire text.
const EXACT_MATCH_BONUS: i64 = 100;

/// A successful match of a query against one text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub score: i64,

    /// Character offsets of each matched query character, strictly increasing.
    pub positions: Vec<usize>,
}

/// Match `query` against `text`, ignoring case.
///
/// Returns `None` unless every query character is found in order. An empty
/// query never matches.
pub fn match_text(query: &str, text: &str) -> Option<MatchResult> {
    let query: Vec<char> = query.chars().map(fold).collect();
    if query.is_empty() {
        return None;
    }

    let text: Vec<char> = text.chars().collect();
    if text.len() < query.len() {
        return None;
    }

    let mut positions = Vec::with_capacity(query.len());
    let mut score = 0;
    let mut run_bonus = 0;
    let mut previous: Option<usize> = None;

    for (offset, &ch) in text.iter().enumerate() {
        let Some(&wanted) = query.get(positions.len()) else {
            break;
        };
        if fold(ch) != wanted {
            continue;
        }

        if previous.is_some_and(|prev| prev + 1 == offset) {
            run_bonus += CONSECUTIVE_STEP;
            score += run_bonus;
        } else {
            run_bonus = 0;
        }

        if offset == 0 || is_separator(text[offset - 1]) {
            score += WORD_BOUNDARY_BONUS;
        }

        score += (POSITION_WINDOW - offset as i64).max(0);

        positions.push(offset);
        previous = Some(offset);
    }

    if positions.len() != query.len() {
        return None;
    }

    if text.len() == query.len() && text.iter().map(|&c| fold(c)).eq(query.iter().copied()) {
        score += EXACT_MATCH_BONUS;
    }

    Some(MatchResult { score, positions })
}

/// Case-fold `text` one character at a time, so the result has the same
/// character count as the input and offsets carry over.
pub fn fold_case(text: &str) -> String {
    text.chars().map(fold).collect()
}

/// Case-fold a single character without changing the character count.
fn fold(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '-' | '_' | '/' | '.')
}
