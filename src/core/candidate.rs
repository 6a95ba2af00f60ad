//! Candidate items that the palette can search over.

use serde::{Deserialize, Serialize};

/// Where a candidate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Tab,
    Bookmark,
    History,
    SiteAction,
}

impl Category {
    /// Human-readable label used for group headers.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Tab => "Tabs",
            Category::Bookmark => "Bookmarks",
            Category::History => "History",
            Category::SiteAction => "Actions",
        }
    }
}

/// An item eligible for search.
///
/// Title and URL are always present (possibly empty). The remaining fields are
/// carried through untouched for the renderer and the action dispatcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub title: String,
    pub url: String,
    pub category: Category,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_id: Option<u64>,

    #[serde(default)]
    pub active: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_label: Option<String>,
}

impl Candidate {
    pub fn new(title: impl Into<String>, url: impl Into<String>, category: Category) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            category,
            tab_id: None,
            active: false,
            icon_url: None,
            group_label: None,
        }
    }

    pub fn tab(id: u64, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            tab_id: Some(id),
            ..Self::new(title, url, Category::Tab)
        }
    }

    pub fn bookmark(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(title, url, Category::Bookmark)
    }

    pub fn history(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(title, url, Category::History)
    }

    pub fn with_icon(mut self, icon_url: Option<String>) -> Self {
        self.icon_url = icon_url;
        self
    }

    /// Badge text shown next to tab results.
    pub fn badge(&self) -> Option<&'static str> {
        match self.category {
            Category::Tab if self.active => Some("active"),
            Category::Tab => Some("tab"),
            _ => None,
        }
    }
}
