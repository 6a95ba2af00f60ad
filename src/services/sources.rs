//! Browser snapshot loading.
//!
//! The palette searches an already-materialized list of tabs, bookmarks and
//! history entries. A snapshot is that list as exported from the browser, in
//! the shapes the browser APIs return them.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use super::favicon::favicon_url;
use super::site_actions::SiteActionIndex;
use crate::config::Config;
use crate::core::{Candidate, Category};
use crate::error::OmniResult;

/// An open tab.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TabInfo {
    pub id: u64,
    pub title: String,
    pub url: String,
    pub active: bool,
    pub fav_icon_url: Option<String>,
}

/// A node of the bookmark tree: a bookmark when `url` is set, otherwise a
/// folder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookmarkNode {
    pub title: String,
    pub url: Option<String>,
    pub children: Vec<BookmarkNode>,
}

/// A visited page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistoryEntry {
    pub title: String,
    pub url: String,
}

/// Everything the palette can search, as exported from the browser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub tabs: Vec<TabInfo>,
    /// Roots of the bookmark tree.
    pub bookmarks: Vec<BookmarkNode>,
    pub history: Vec<HistoryEntry>,
}

impl Snapshot {
    pub fn from_json(json: &str) -> OmniResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> OmniResult<Self> {
        let content = fs::read_to_string(path)?;
        let snapshot = Self::from_json(&content)?;
        info!(
            path = %path.display(),
            tabs = snapshot.tabs.len(),
            bookmark_roots = snapshot.bookmarks.len(),
            history = snapshot.history.len(),
            "Loaded snapshot"
        );
        Ok(snapshot)
    }

    /// Build the candidate list: tabs, then bookmarks, then history, then the
    /// configured site actions.
    pub fn into_candidates(self, config: &Config) -> Vec<Candidate> {
        let icons = IconPolicy {
            fetch_favicons: config.general.fetch_favicons,
        };
        let mut candidates = Vec::with_capacity(self.tabs.len() + self.history.len());

        for tab in self.tabs {
            let icon = tab.fav_icon_url.or_else(|| icons.derive(&tab.url));
            let mut candidate = Candidate::tab(tab.id, tab.title, tab.url).with_icon(icon);
            candidate.active = tab.active;
            candidates.push(candidate);
        }

        flatten_bookmarks(&self.bookmarks, None, &icons, &mut candidates);

        for entry in self.history {
            let title = fallback_title(entry.title, &entry.url);
            let icon = icons.derive(&entry.url);
            candidates.push(Candidate::history(title, entry.url).with_icon(icon));
        }

        candidates.extend(SiteActionIndex::new(config).candidates());
        candidates
    }
}

struct IconPolicy {
    fetch_favicons: bool,
}

impl IconPolicy {
    fn derive(&self, url: &str) -> Option<String> {
        if self.fetch_favicons {
            favicon_url(url)
        } else {
            None
        }
    }
}

/// Depth-first, pre-order walk collecting bookmarks. Each bookmark records the
/// folder it was found in as its group label.
fn flatten_bookmarks(
    nodes: &[BookmarkNode],
    folder: Option<&str>,
    icons: &IconPolicy,
    out: &mut Vec<Candidate>,
) {
    for node in nodes {
        if let Some(url) = &node.url {
            let title = fallback_title(node.title.clone(), url);
            let mut candidate = Candidate::bookmark(title, url.clone()).with_icon(icons.derive(url));
            candidate.group_label = folder.map(str::to_string);
            out.push(candidate);
        }
        if !node.children.is_empty() {
            let label = if node.title.is_empty() {
                folder
            } else {
                Some(node.title.as_str())
            };
            flatten_bookmarks(&node.children, label, icons, out);
        }
    }
}

/// Untitled pages show their URL instead.
fn fallback_title(title: String, url: &str) -> String {
    if title.trim().is_empty() {
        url.to_string()
    } else {
        title
    }
}

/// Count candidates per category, in category declaration order.
pub fn category_counts(candidates: &[Candidate]) -> Vec<(Category, usize)> {
    [
        Category::Tab,
        Category::Bookmark,
        Category::History,
        Category::SiteAction,
    ]
    .into_iter()
    .map(|category| {
        let count = candidates.iter().filter(|c| c.category == category).count();
        (category, count)
    })
    .collect()
}
