//! Omni - command-palette search for browser tabs, bookmarks and history.
//!
//! Omni ranks an already-materialized list of candidates (open tabs,
//! bookmarks, history entries and site-specific quick actions) against the
//! text typed into a palette input box.
//!
//! # Architecture
//!
//! - [`core`] - the pure ranking pipeline (matcher, scorer, query parser, engine)
//! - [`session`] - per-palette state: previous input, open/closed, candidates
//! - [`services`] - snapshot loading, site actions, favicons, highlight runs
//! - [`config`] - configuration loading and management
//! - [`cli`] - command-line frontend
//!
//! # Example
//!
//! ```
//! use omni::{Candidate, SearchEngine, SearchOptions};
//!
//! let candidates = vec![
//!     Candidate::tab(1, "Hacker News", "https://news.ycombinator.com"),
//!     Candidate::bookmark("Rust", "https://www.rust-lang.org"),
//! ];
//!
//! let results = SearchEngine::new().search(&candidates, "hn", &SearchOptions::default());
//! assert_eq!(results.items[0].candidate.title, "Hacker News");
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod logging;
pub mod services;
pub mod session;

mod error;

// Re-export commonly used types for convenience
pub use crate::config::Config;
pub use crate::core::{
    match_text, score_candidate, Candidate, Category, InputChange, MatchResult, ParsedQuery,
    QueryParser, ScoredCandidate, SearchEngine, SearchOptions, SearchResults,
};
pub use crate::error::{OmniError, OmniResult};
pub use crate::session::{PaletteAction, PaletteSession};
