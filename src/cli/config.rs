//! `omni config` subcommands.

use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use crate::config::Config;
use crate::error::OmniError;

/// Print the effective config as TOML.
pub fn run_show(config: &Config) -> Result<()> {
    let content = toml::to_string_pretty(config).context("Failed to serialize config")?;
    print!("{}", content);
    Ok(())
}

/// Write a default config file to `path`.
pub fn run_init(path: &Path, force: bool) -> Result<()> {
    init_config(path, force)?;
    println!(
        "{} {}",
        style("✓").green().bold(),
        style(format!("Wrote {}", path.display())).cyan()
    );
    Ok(())
}

fn init_config(path: &Path, force: bool) -> Result<(), OmniError> {
    if path.exists() && !force {
        return Err(OmniError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    Config::default().save_to(path)
}
