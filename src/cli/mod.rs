//! CLI commands for Omni.
//!
//! Runs the palette search against a browser snapshot file: one-shot queries,
//! keystroke replay through a session, and config management.

pub mod config;
pub mod search;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "omni")]
#[command(about = "Search open tabs, bookmarks, history and site actions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ~/.config/omni/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one query against a snapshot
    Search {
        /// Query text, optionally starting with a filter like "/tabs "
        #[arg(default_value = "")]
        query: String,

        /// Snapshot JSON file with tabs, bookmarks and history
        #[arg(short, long, value_name = "FILE")]
        snapshot: PathBuf,

        /// Plain substring matching instead of fuzzy ranking
        #[arg(long)]
        exact: bool,

        /// Maximum number of results (default: from config)
        #[arg(long)]
        limit: Option<usize>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Feed each stdin line to the palette as the next input value
    Replay {
        /// Snapshot JSON file with tabs, bookmarks and history
        #[arg(short, long, value_name = "FILE")]
        snapshot: PathBuf,
    },

    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the config file path
    Path,

    /// Print the effective config
    Show,

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Run the parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config;

    match cli.command {
        Commands::Search {
            query,
            snapshot,
            exact,
            limit,
            json,
        } => {
            let config = load_config(config_path.as_deref())?;
            let args = search::SearchArgs {
                query,
                snapshot,
                exact,
                limit,
                json,
            };
            search::run_search(&config, &args)
        }
        Commands::Replay { snapshot } => {
            let config = load_config(config_path.as_deref())?;
            search::run_replay(&config, &snapshot)
        }
        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);
            match action {
                ConfigCommands::Path => {
                    println!("{}", path.display());
                    Ok(())
                }
                ConfigCommands::Show => config::run_show(&load_config(Some(&path))?),
                ConfigCommands::Init { force } => config::run_init(&path, force),
            }
        }
    }
}

/// Load an explicit config file strictly, or fall back to the default one.
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) if path.exists() => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        _ => Ok(Config::load()),
    }
}
