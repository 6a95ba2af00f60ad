//! Per-candidate scoring across title, URL and their concatenations.
//!
//! A query may name words from both fields ("ycombinator news"), which neither
//! field matches alone. Matching `title + " " + url` and `url + " " + title`
//! catches those, and the better of the two directions contributes to the
//! aggregate alongside the direct field matches.

use super::candidate::Candidate;
use super::matcher::{match_text, MatchResult};

/// Title matches count double so name hits outrank incidental URL hits.
const TITLE_WEIGHT: i64 = 2;

/// Character joining the two fields in a combined match.
const FIELD_SEPARATOR: char = ' ';

/// Aggregate score and highlight offsets for one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateScore {
    pub score: i64,
    pub title_highlights: Vec<usize>,
    pub url_highlights: Vec<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldOrder {
    TitleFirst,
    UrlFirst,
}

/// A match against the concatenation of both fields.
#[derive(Debug)]
struct CombinedMatch {
    order: FieldOrder,
    result: MatchResult,
    /// Length in characters of the leading field.
    first_len: usize,
}

impl CombinedMatch {
    /// Split combined offsets back into `(title, url)` offsets.
    ///
    /// The offset of the injected separator belongs to neither field and is
    /// dropped.
    fn split(&self) -> (Vec<usize>, Vec<usize>) {
        let mut first = Vec::new();
        let mut second = Vec::new();

        for &pos in &self.result.positions {
            if pos < self.first_len {
                first.push(pos);
            } else if pos > self.first_len {
                second.push(pos - self.first_len - 1);
            }
        }

        match self.order {
            FieldOrder::TitleFirst => (first, second),
            FieldOrder::UrlFirst => (second, first),
        }
    }
}

/// Score `candidate` against a non-empty `query`.
///
/// Returns `None` when neither field, nor either concatenation, contains the
/// query as a subsequence.
pub fn score_candidate(candidate: &Candidate, query: &str) -> Option<CandidateScore> {
    let title = match_text(query, &candidate.title);
    let url = match_text(query, &candidate.url);
    let combined = combined_match(&candidate.title, &candidate.url, query);

    let score = title.as_ref().map_or(0, |m| m.score * TITLE_WEIGHT)
        + url.as_ref().map_or(0, |m| m.score)
        + combined.as_ref().map_or(0, |m| m.result.score);

    let (title_highlights, url_highlights) = match (title, url, combined) {
        (None, None, None) => return None,
        (None, None, Some(combined)) => combined.split(),
        (title, url, _) => (
            title.map(|m| m.positions).unwrap_or_default(),
            url.map(|m| m.positions).unwrap_or_default(),
        ),
    };

    Some(CandidateScore {
        score,
        title_highlights,
        url_highlights,
    })
}

/// Match both concatenation orders and keep the higher-scoring one.
///
/// Ties keep the title-first order.
fn combined_match(title: &str, url: &str, query: &str) -> Option<CombinedMatch> {
    let title_first = match_text(query, &join(title, url)).map(|result| CombinedMatch {
        order: FieldOrder::TitleFirst,
        result,
        first_len: title.chars().count(),
    });
    let url_first = match_text(query, &join(url, title)).map(|result| CombinedMatch {
        order: FieldOrder::UrlFirst,
        result,
        first_len: url.chars().count(),
    });

    match (title_first, url_first) {
        (Some(a), Some(b)) if b.result.score > a.result.score => Some(b),
        (Some(a), _) => Some(a),
        (None, b) => b,
    }
}

fn join(first: &str, second: &str) -> String {
    let mut joined = String::with_capacity(first.len() + second.len() + 1);
    joined.push_str(first);
    joined.push(FIELD_SEPARATOR);
    joined.push_str(second);
    joined
}
