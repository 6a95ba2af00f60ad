//! `omni search` and `omni replay`.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use console::style;

use crate::config::Config;
use crate::core::{Candidate, InputChange, ScoredCandidate, SearchEngine, SearchOptions, SearchResults};
use crate::services::highlight::segments;
use crate::services::sources::{category_counts, Snapshot};
use crate::session::PaletteSession;

/// Results shown per keystroke in replay mode.
const REPLAY_PREVIEW: usize = 5;

pub struct SearchArgs {
    pub query: String,
    pub snapshot: PathBuf,
    pub exact: bool,
    pub limit: Option<usize>,
    pub json: bool,
}

fn options_for(config: &Config, args: &SearchArgs) -> SearchOptions {
    let mut options = SearchOptions::from(&config.search);
    if args.exact {
        options.fuzzy = false;
    }
    if args.limit.is_some() {
        options.limit = args.limit;
    }
    options
}

/// Run a single query and print the grouped results.
pub fn run_search(config: &Config, args: &SearchArgs) -> Result<()> {
    let candidates = load_candidates(config, &args.snapshot)?;
    let options = options_for(config, args);
    let results = SearchEngine::new().search(&candidates, &args.query, &options);

    let mut out = io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &results).context("Failed to write JSON")?;
        writeln!(out)?;
    } else {
        print_results(&mut out, &results, None)?;
    }
    Ok(())
}

/// Read input values from stdin, one per line, and show how the palette
/// reacts to each.
pub fn run_replay(config: &Config, snapshot: &Path) -> Result<()> {
    let candidates = load_candidates(config, snapshot)?;
    let mut out = io::stdout().lock();
    writeln!(out, "{}", style(loaded_summary(&candidates)).dim())?;

    let mut session = PaletteSession::new(SearchEngine::new(), SearchOptions::from(&config.search));
    session.open(candidates);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        let outcome = session.handle_input(&line);

        let note = match outcome.change {
            InputChange::Typed => String::new(),
            InputChange::Expanded(token) => format!(" (expanded to {:?})", token),
            InputChange::Cleared => " (cleared)".to_string(),
        };
        writeln!(
            out,
            "{} {:?}{}",
            style(">").magenta().bold(),
            outcome.input,
            style(note).dim()
        )?;
        print_results(&mut out, &outcome.results, Some(REPLAY_PREVIEW))?;
    }
    Ok(())
}

fn load_candidates(config: &Config, snapshot: &Path) -> Result<Vec<Candidate>> {
    let snapshot = Snapshot::load(snapshot)
        .with_context(|| format!("Failed to load snapshot {}", snapshot.display()))?;
    Ok(snapshot.into_candidates(config))
}

/// Per-category counts, e.g. "Loaded Tabs 2, Bookmarks 3".
fn loaded_summary(candidates: &[Candidate]) -> String {
    let counts: Vec<String> = category_counts(candidates)
        .into_iter()
        .filter(|&(_, count)| count > 0)
        .map(|(category, count)| format!("{} {}", category.label(), count))
        .collect();
    if counts.is_empty() {
        "Loaded nothing".to_string()
    } else {
        format!("Loaded {}", counts.join(", "))
    }
}

fn print_results(
    out: &mut impl Write,
    results: &SearchResults<'_>,
    preview: Option<usize>,
) -> io::Result<()> {
    let mut shown = 0;
    'groups: for group in results.groups() {
        if preview.is_some_and(|max| shown >= max) {
            break;
        }
        if let Some(category) = group.header {
            writeln!(out, "{}", style(category.label()).bold().underlined())?;
        }
        for item in group.items {
            if preview.is_some_and(|max| shown >= max) {
                break 'groups;
            }
            print_item(out, item)?;
            shown += 1;
        }
    }
    writeln!(out, "{}", style(results.count_label()).dim())
}

fn print_item(out: &mut impl Write, item: &ScoredCandidate<'_>) -> io::Result<()> {
    let candidate = item.candidate;
    let badge = candidate
        .badge()
        .map(|b| format!(" {}", style(format!("[{}]", b)).blue()))
        .unwrap_or_default();

    writeln!(
        out,
        "  {}{}",
        highlighted(&candidate.title, &item.title_highlights),
        badge
    )?;
    writeln!(
        out,
        "    {}",
        style(highlighted(&candidate.url, &item.url_highlights)).dim()
    )
}

fn highlighted(text: &str, positions: &[usize]) -> String {
    segments(text, positions)
        .into_iter()
        .map(|segment| {
            if segment.matched {
                style(segment.text).yellow().bold().to_string()
            } else {
                segment.text.to_string()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(exact: bool, limit: Option<usize>) -> SearchArgs {
        SearchArgs {
            query: String::new(),
            snapshot: PathBuf::from("unused.json"),
            exact,
            limit,
            json: false,
        }
    }

    #[test]
    fn test_options_follow_config() {
        let mut config = Config::default();
        config.search.max_results = 10;

        let options = options_for(&config, &args(false, None));
        assert!(options.fuzzy);
        assert_eq!(options.limit, Some(10));

        let options = options_for(&config, &args(true, Some(3)));
        assert!(!options.fuzzy);
        assert_eq!(options.limit, Some(3));
    }

    #[test]
    fn test_loaded_summary() {
        let candidates = vec![
            Candidate::tab(1, "Inbox", "https://mail.example.com"),
            Candidate::tab(2, "Docs", "https://docs.rs"),
            Candidate::history("Lobsters", "https://lobste.rs"),
        ];
        assert_eq!(loaded_summary(&candidates), "Loaded Tabs 2, History 1");
        assert_eq!(loaded_summary(&[]), "Loaded nothing");
    }

    #[test]
    fn test_print_results_plain() {
        console::set_colors_enabled(false);
        let candidates = vec![
            Candidate::tab(1, "Hacker News", "https://news.ycombinator.com"),
            Candidate::bookmark("Rust", "https://www.rust-lang.org"),
        ];
        let results = SearchEngine::new().search(&candidates, "", &SearchOptions::default());

        let mut buf = Vec::new();
        print_results(&mut buf, &results, Some(1)).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("Tabs"));
        assert!(text.contains("Hacker News [tab]"));
        assert!(!text.contains("Bookmarks"));
        assert!(!text.contains("Rust"));
        assert!(text.ends_with("2 results\n"));
    }
}
