//! Core engine module - the pure ranking pipeline.
//!
//! - [`matcher`] - fuzzy subsequence matching of one text field
//! - [`scorer`] - per-candidate scoring across title and URL
//! - [`query`] - filter prefixes and input-box editing rules
//! - [`search`] - filtering, ranking and grouping
//!
//! Nothing in here performs I/O or keeps state between calls.

pub mod candidate;
pub mod matcher;
pub mod query;
pub mod scorer;
pub mod search;

pub use candidate::{Candidate, Category};
pub use matcher::{fold_case, match_text, MatchResult};
pub use query::{FilterCommand, InputChange, ParsedQuery, QueryParser, FILTER_COMMANDS};
pub use scorer::{score_candidate, CandidateScore};
pub use search::{ResultGroup, ScoredCandidate, SearchEngine, SearchOptions, SearchResults};
