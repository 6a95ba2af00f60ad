//! Site-specific quick actions configured by the user.
//!
//! Each action becomes a `site-action` candidate whose URL may contain a
//! `{query}` placeholder, filled in with the search text when activated.

use crate::config::{Config, SiteActionConfig};
use crate::core::{Candidate, Category};

const QUERY_PLACEHOLDER: &str = "{query}";

/// Index of configured site actions.
#[derive(Debug, Clone, Default)]
pub struct SiteActionIndex {
    pub actions: Vec<SiteActionConfig>,
}

impl SiteActionIndex {
    pub fn new(config: &Config) -> Self {
        Self {
            actions: config.site_actions.clone(),
        }
    }

    /// Candidates for every configured action, in config order.
    ///
    /// The keyword becomes the group label only; ranking sees the name and
    /// URL like any other candidate.
    pub fn candidates(&self) -> Vec<Candidate> {
        self.actions
            .iter()
            .map(|action| Candidate {
                group_label: Some(action.keyword.clone()),
                icon_url: action.icon.clone(),
                ..Candidate::new(action.name.clone(), action.url.clone(), Category::SiteAction)
            })
            .collect()
    }
}

/// Fill the `{query}` placeholder of `url`, URL-encoding the query.
pub fn resolve_template(url: &str, query: &str) -> String {
    if url.contains(QUERY_PLACEHOLDER) {
        url.replace(QUERY_PLACEHOLDER, &urlencoding::encode(query))
    } else {
        url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{SearchEngine, SearchOptions};

    fn config() -> Config {
        toml::from_str(
            r#"
            [[site_actions]]
            keyword = "gh"
            name = "Search GitHub"
            url = "https://github.com/search?q={query}"

            [[site_actions]]
            keyword = "mdn"
            name = "MDN"
            url = "https://developer.mozilla.org"
            icon = "https://developer.mozilla.org/favicon.ico"
            "#,
        )
        .unwrap()
    }

    #[test]
    fn test_candidates() {
        let index = SiteActionIndex::new(&config());
        let candidates = index.candidates();

        assert_eq!(candidates.len(), 2);
        assert!(candidates.iter().all(|c| c.category == Category::SiteAction));
        assert_eq!(candidates[0].title, "Search GitHub");
        assert_eq!(candidates[0].group_label.as_deref(), Some("gh"));
        assert_eq!(
            candidates[1].icon_url.as_deref(),
            Some("https://developer.mozilla.org/favicon.ico")
        );
    }

    #[test]
    fn test_keyword_is_label_not_search_text() {
        let candidates = SiteActionIndex::new(&config()).candidates();
        let engine = SearchEngine::new();

        // "mdn" only appears as the keyword of the second action
        let results = engine.search(&candidates, "/actions mdn", &SearchOptions::default());
        assert_eq!(results.len(), 1);
        assert_eq!(results.items[0].candidate.title, "MDN");

        let results = engine.search(&candidates, "/actions gh", &SearchOptions::default());
        assert_eq!(results.items[0].candidate.title, "Search GitHub");
        assert!(!results.items[0].title_highlights.is_empty());
    }

    #[test]
    fn test_resolve_template() {
        assert_eq!(
            resolve_template("https://github.com/search?q={query}", "serde json"),
            "https://github.com/search?q=serde%20json"
        );
        assert_eq!(
            resolve_template("https://developer.mozilla.org", "fetch"),
            "https://developer.mozilla.org"
        );
    }
}
