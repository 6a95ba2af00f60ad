//! Search engine for Omni - parse, filter, rank and group candidates.
//!
//! The engine is stateless: every call parses the raw query afresh and borrows
//! the candidate list only for the lifetime of the returned results.

use std::cmp::Reverse;

use serde::Serialize;
use tracing::debug;

use super::candidate::{Candidate, Category};
use super::matcher::fold_case;
use super::query::QueryParser;
use super::scorer::{score_candidate, CandidateScore};
use crate::config::SearchConfig;

/// Caller-controlled search behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Rank with the fuzzy scorer. When false, fall back to plain substring
    /// containment on title or URL.
    pub fuzzy: bool,

    /// Truncate the ranked list to this many results.
    pub limit: Option<usize>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            fuzzy: true,
            limit: None,
        }
    }
}

impl From<&SearchConfig> for SearchOptions {
    fn from(config: &SearchConfig) -> Self {
        Self {
            fuzzy: config.fuzzy,
            limit: Some(config.max_results as usize),
        }
    }
}

/// A candidate together with its score and highlight offsets.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCandidate<'a> {
    #[serde(flatten)]
    pub candidate: &'a Candidate,

    /// Absent for results listed without ranking.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<i64>,

    /// Character offsets into `candidate.title`.
    pub title_highlights: Vec<usize>,

    /// Character offsets into `candidate.url`.
    pub url_highlights: Vec<usize>,
}

impl<'a> ScoredCandidate<'a> {
    fn unscored(candidate: &'a Candidate) -> Self {
        Self {
            candidate,
            score: None,
            title_highlights: Vec::new(),
            url_highlights: Vec::new(),
        }
    }

    fn scored(candidate: &'a Candidate, score: CandidateScore) -> Self {
        Self {
            candidate,
            score: Some(score.score),
            title_highlights: score.title_highlights,
            url_highlights: score.url_highlights,
        }
    }
}

/// Results for one group header. `header` is `None` when grouping is
/// suppressed because a category filter is active.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultGroup<'r, 'a> {
    pub header: Option<Category>,
    pub items: Vec<&'r ScoredCandidate<'a>>,
}

/// The ordered output of one search pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults<'a> {
    pub items: Vec<ScoredCandidate<'a>>,

    /// The category filter parsed from the query, if any.
    pub category_filter: Option<Category>,
}

impl<'a> SearchResults<'a> {
    pub fn has_category_filter(&self) -> bool {
        self.category_filter.is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScoredCandidate<'a>> {
        self.items.iter()
    }

    /// Result count for the status line, e.g. "1 result" or "12 results".
    pub fn count_label(&self) -> String {
        match self.items.len() {
            1 => "1 result".to_string(),
            n => format!("{} results", n),
        }
    }

    /// Group results by category for display.
    ///
    /// Groups appear in the rank order of their best item and items keep
    /// their ranked order within a group. With a category filter active the
    /// list is returned as a single headerless group.
    pub fn groups(&self) -> Vec<ResultGroup<'_, 'a>> {
        if self.items.is_empty() {
            return Vec::new();
        }

        if self.has_category_filter() {
            return vec![ResultGroup {
                header: None,
                items: self.items.iter().collect(),
            }];
        }

        let mut groups: Vec<ResultGroup<'_, 'a>> = Vec::new();
        for item in &self.items {
            let category = item.candidate.category;
            match groups.iter_mut().find(|g| g.header == Some(category)) {
                Some(group) => group.items.push(item),
                None => groups.push(ResultGroup {
                    header: Some(category),
                    items: vec![item],
                }),
            }
        }
        groups
    }
}

/// The search engine that powers the palette.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    parser: QueryParser,
}

impl SearchEngine {
    /// Create a new search engine instance.
    pub fn new() -> Self {
        Self::with_parser(QueryParser::new())
    }

    pub fn with_parser(parser: QueryParser) -> Self {
        Self { parser }
    }

    pub fn parser(&self) -> &QueryParser {
        &self.parser
    }

    /// Search `candidates` with the raw input text.
    ///
    /// An empty search text after the filter prefix lists every candidate of
    /// the filtered set, unscored and in input order.
    pub fn search<'a>(
        &self,
        candidates: &'a [Candidate],
        raw_query: &str,
        options: &SearchOptions,
    ) -> SearchResults<'a> {
        let parsed = self.parser.parse(raw_query);
        let filtered = candidates
            .iter()
            .filter(|c| parsed.category.map_or(true, |category| c.category == category));

        let mut items: Vec<ScoredCandidate<'a>> = if parsed.text.is_empty() {
            filtered.map(ScoredCandidate::unscored).collect()
        } else if !options.fuzzy {
            let needle = fold_case(&parsed.text);
            filtered
                .filter(|c| contains_ignore_case(c, &needle))
                .map(ScoredCandidate::unscored)
                .collect()
        } else {
            let mut scored: Vec<_> = filtered
                .filter_map(|c| {
                    score_candidate(c, &parsed.text).map(|score| ScoredCandidate::scored(c, score))
                })
                .collect();
            // Stable: equal scores keep input order
            scored.sort_by_key(|item| Reverse(item.score));
            scored
        };

        if let Some(limit) = options.limit {
            items.truncate(limit);
        }

        debug!(
            query = %parsed.text,
            filter = ?parsed.category,
            fuzzy = options.fuzzy,
            candidates = candidates.len(),
            results = items.len(),
            "search completed"
        );

        SearchResults {
            items,
            category_filter: parsed.category,
        }
    }
}

/// `needle` must already be folded with [`fold_case`].
fn contains_ignore_case(candidate: &Candidate, needle: &str) -> bool {
    fold_case(&candidate.title).contains(needle) || fold_case(&candidate.url).contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates() -> Vec<Candidate> {
        vec![
            Candidate::tab(1, "Hacker News", "https://news.ycombinator.com"),
            Candidate::tab(2, "GitHub", "https://github.com"),
            Candidate::bookmark("Rust Book", "https://doc.rust-lang.org/book/"),
            Candidate::history("Lobsters", "https://lobste.rs"),
            Candidate::bookmark("News Archive", "https://archive.org/news"),
        ]
    }

    fn titles<'a>(results: &'a SearchResults<'_>) -> Vec<&'a str> {
        results.iter().map(|r| r.candidate.title.as_str()).collect()
    }

    #[test]
    fn test_empty_query_passes_everything_through() {
        let items = candidates();
        let results = SearchEngine::new().search(&items, "", &SearchOptions::default());

        assert_eq!(results.len(), items.len());
        assert!(!results.has_category_filter());
        assert!(results
            .iter()
            .all(|r| r.score.is_none() && r.title_highlights.is_empty() && r.url_highlights.is_empty()));
        assert_eq!(titles(&results)[0], "Hacker News");
    }

    #[test]
    fn test_category_prefix_browses_unscored() {
        let items = candidates();
        let results = SearchEngine::new().search(&items, "/tabs ", &SearchOptions::default());

        assert!(results.has_category_filter());
        assert_eq!(results.category_filter, Some(Category::Tab));
        assert_eq!(titles(&results), vec!["Hacker News", "GitHub"]);
        assert!(results.iter().all(|r| r.score.is_none()));

        // Whitespace after the prefix is still browsing
        let results = SearchEngine::new().search(&items, "/tabs    ", &SearchOptions::default());
        assert_eq!(titles(&results), vec!["Hacker News", "GitHub"]);
        assert!(results.iter().all(|r| r.score.is_none()));

        let results = SearchEngine::new().search(&items, "   ", &SearchOptions::default());
        assert_eq!(results.len(), items.len());
        assert!(!results.has_category_filter());
        assert!(results.iter().all(|r| r.score.is_none()));
    }

    #[test]
    fn test_title_with_expanding_lowercase_matches_itself() {
        let items = vec![Candidate::bookmark("İstanbul", "https://tr.example.org/city")];

        let results = SearchEngine::new().search(&items, "İstanbul", &SearchOptions::default());
        assert_eq!(results.len(), 1);
        assert_eq!(results.items[0].title_highlights, (0..8).collect::<Vec<_>>());

        let exact = SearchOptions {
            fuzzy: false,
            limit: None,
        };
        assert_eq!(SearchEngine::new().search(&items, "İstanbul", &exact).len(), 1);
        assert_eq!(SearchEngine::new().search(&items, "istanbul", &exact).len(), 1);
    }

    #[test]
    fn test_category_prefix_with_query() {
        let items = candidates();
        let results = SearchEngine::new().search(&items, "/bookmarks news", &SearchOptions::default());

        assert_eq!(titles(&results), vec!["News Archive"]);
        assert!(results.has_category_filter());
    }

    #[test]
    fn test_ranked_descending() {
        let items = candidates();
        let results = SearchEngine::new().search(&items, "news", &SearchOptions::default());

        assert!(results.len() >= 2);
        let scores: Vec<i64> = results.iter().filter_map(|r| r.score).collect();
        assert_eq!(scores.len(), results.len());
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let items = candidates();
        let results = SearchEngine::new().search(&items, "qqqqzz", &SearchOptions::default());
        assert!(results.is_empty());
        assert_eq!(results.count_label(), "0 results");

        let results = SearchEngine::new().search(&[], "news", &SearchOptions::default());
        assert!(results.is_empty());
    }

    #[test]
    fn test_ties_keep_input_order() {
        let items = vec![
            Candidate::bookmark("Alpha", "x"),
            Candidate::history("Alpha", "x"),
            Candidate::tab(9, "Alpha", "x"),
        ];
        let results = SearchEngine::new().search(&items, "alp", &SearchOptions::default());

        let categories: Vec<Category> = results.iter().map(|r| r.candidate.category).collect();
        assert_eq!(
            categories,
            vec![Category::Bookmark, Category::History, Category::Tab]
        );
    }

    #[test]
    fn test_idempotent() {
        let items = candidates();
        let engine = SearchEngine::new();
        let first = engine.search(&items, "hn", &SearchOptions::default());
        let second = engine.search(&items, "hn", &SearchOptions::default());
        assert_eq!(first, second);
    }

    #[test]
    fn test_output_is_subset_of_input() {
        let items = candidates();
        for query in ["n", "rs", "/history l", "github", "ycombinator news"] {
            let results = SearchEngine::new().search(&items, query, &SearchOptions::default());
            assert!(results.len() <= items.len());
            for result in results.iter() {
                let count = results
                    .iter()
                    .filter(|r| std::ptr::eq(r.candidate, result.candidate))
                    .count();
                assert_eq!(count, 1, "duplicate result for {query}");
                assert!(items.iter().any(|c| std::ptr::eq(c, result.candidate)));
            }
        }
    }

    #[test]
    fn test_exact_mode_uses_substring() {
        let items = candidates();
        let options = SearchOptions {
            fuzzy: false,
            limit: None,
        };

        let results = SearchEngine::new().search(&items, "NEWS", &options);
        assert_eq!(titles(&results), vec!["Hacker News", "News Archive"]);
        assert!(results.iter().all(|r| r.score.is_none() && r.title_highlights.is_empty()));

        // "hn" is a fuzzy subsequence of "Hacker News" but not a substring
        let results = SearchEngine::new().search(&items, "hn", &options);
        assert!(results.is_empty());
    }

    #[test]
    fn test_limit_truncates() {
        let items = candidates();
        let options = SearchOptions {
            fuzzy: true,
            limit: Some(2),
        };
        assert_eq!(SearchEngine::new().search(&items, "", &options).len(), 2);
    }

    #[test]
    fn test_combined_field_query() {
        let items = candidates();
        let results =
            SearchEngine::new().search(&items, "ycombinator news", &SearchOptions::default());

        let top = &results.items[0];
        assert_eq!(top.candidate.title, "Hacker News");
        assert!(!top.title_highlights.is_empty());
        assert!(!top.url_highlights.is_empty());
    }

    #[test]
    fn test_groups_follow_rank_order() {
        let items = candidates();
        let results = SearchEngine::new().search(&items, "", &SearchOptions::default());
        let groups = results.groups();

        let headers: Vec<_> = groups.iter().map(|g| g.header).collect();
        assert_eq!(
            headers,
            vec![
                Some(Category::Tab),
                Some(Category::Bookmark),
                Some(Category::History)
            ]
        );
        let bookmarks: Vec<&str> = groups[1]
            .items
            .iter()
            .map(|r| r.candidate.title.as_str())
            .collect();
        assert_eq!(bookmarks, vec!["Rust Book", "News Archive"]);
    }

    #[test]
    fn test_groups_suppressed_when_filtered() {
        let items = candidates();
        let results = SearchEngine::new().search(&items, "/tabs", &SearchOptions::default());
        let groups = results.groups();

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].header, None);
        assert_eq!(groups[0].items.len(), 2);
    }

    #[test]
    fn test_count_label() {
        let items = vec![Candidate::bookmark("Only", "https://only.example")];
        let results = SearchEngine::new().search(&items, "", &SearchOptions::default());
        assert_eq!(results.count_label(), "1 result");
    }

    #[test]
    fn test_serializes_flat() {
        let items = vec![Candidate::tab(4, "Mail", "https://mail.example.com")];
        let results = SearchEngine::new().search(&items, "mail", &SearchOptions::default());
        let json = serde_json::to_value(&results).unwrap();

        let first = &json["items"][0];
        assert_eq!(first["title"], "Mail");
        assert_eq!(first["tabId"], 4);
        assert_eq!(first["category"], "tab");
        assert!(first["score"].as_i64().unwrap() > 0);
        assert_eq!(first["titleHighlights"], serde_json::json!([0, 1, 2, 3]));
        assert_eq!(json["categoryFilter"], serde_json::Value::Null);
    }
}
