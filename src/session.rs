//! Palette session state.
//!
//! The search engine is stateless. Whatever the input box needs to remember
//! between keystrokes (the previous value, whether the palette is open, the
//! candidate list fetched when it opened) lives here, owned by the caller.

use serde::Serialize;
use tracing::debug;

use crate::core::{Candidate, Category, InputChange, SearchEngine, SearchOptions, SearchResults};
use crate::services::site_actions::resolve_template;

/// What the host should do when a result is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "request", rename_all = "kebab-case")]
pub enum PaletteAction {
    /// Focus an already open tab.
    SwitchTab {
        #[serde(rename = "tabId")]
        tab_id: u64,
    },
    /// Open a URL in a new tab.
    OpenUrl { url: String },
}

impl PaletteAction {
    /// The action for choosing `candidate` while `query` is the search text.
    ///
    /// Site actions fill their `{query}` placeholder with the query. Tabs
    /// without an id fall back to opening their URL.
    pub fn for_candidate(candidate: &Candidate, query: &str) -> Self {
        match (candidate.category, candidate.tab_id) {
            (Category::Tab, Some(tab_id)) => PaletteAction::SwitchTab { tab_id },
            (Category::SiteAction, _) => PaletteAction::OpenUrl {
                url: resolve_template(&candidate.url, query),
            },
            _ => PaletteAction::OpenUrl {
                url: candidate.url.clone(),
            },
        }
    }
}

/// The result of feeding one input value to the session.
#[derive(Debug, Clone, PartialEq)]
pub struct InputOutcome<'a> {
    pub change: InputChange,
    /// Text the input box should display now.
    pub input: String,
    pub results: SearchResults<'a>,
}

/// State of one open palette.
#[derive(Debug, Default)]
pub struct PaletteSession {
    engine: SearchEngine,
    options: SearchOptions,
    candidates: Vec<Candidate>,
    last_input: String,
    open: bool,
}

impl PaletteSession {
    pub fn new(engine: SearchEngine, options: SearchOptions) -> Self {
        Self {
            engine,
            options,
            candidates: Vec::new(),
            last_input: String::new(),
            open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The last input value as typed.
    pub fn input(&self) -> &str {
        &self.last_input
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Open with a fresh candidate list and an empty input.
    pub fn open(&mut self, candidates: Vec<Candidate>) -> SearchResults<'_> {
        self.candidates = candidates;
        self.last_input.clear();
        self.open = true;
        debug!(candidates = self.candidates.len(), "Palette opened");
        self.engine.search(&self.candidates, "", &self.options)
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Open if closed, close if open. Reopening keeps the old candidates.
    pub fn toggle(&mut self) -> bool {
        if self.open {
            self.close();
        } else {
            self.last_input.clear();
            self.open = true;
        }
        self.open
    }

    /// Apply an edit of the input box and search with the resulting text.
    pub fn handle_input(&mut self, value: &str) -> InputOutcome<'_> {
        let change = self.engine.parser().interpret_input(&self.last_input, value);
        let input = change.apply(value);

        self.last_input.clone_from(&input);
        if change != InputChange::Typed {
            debug!(?change, input = %input, "Input rewritten");
        }

        let results = self.engine.search(&self.candidates, &input, &self.options);
        InputOutcome {
            change,
            input,
            results,
        }
    }

    /// The action for a chosen candidate given the current input.
    pub fn activate(&self, candidate: &Candidate) -> PaletteAction {
        let query = self.engine.parser().parse(&self.last_input).text;
        PaletteAction::for_candidate(candidate, &query)
    }
}
