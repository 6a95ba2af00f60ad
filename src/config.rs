use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::OmniResult;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub search: SearchConfig,
    #[serde(default)]
    pub site_actions: Vec<SiteActionConfig>,
}

/// A site-specific quick action (name -> URL, optionally with `{query}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteActionConfig {
    /// Short label shown next to the action. Not searched; the action is
    /// found through its name and URL.
    pub keyword: String,
    pub name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Derive favicon URLs for items that have none.
    pub fetch_favicons: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Fuzzy ranking; when false, plain substring filtering.
    pub fuzzy: bool,
    pub max_results: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            fuzzy: true,
            max_results: 50,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                // Fallback: ~ is not expanded by PathBuf, so use dirs::home_dir
                dirs::home_dir()
                    .map(|h| h.join(".config"))
                    .unwrap_or_else(|| PathBuf::from("/tmp"))
            })
            .join("omni")
            .join("config.toml")
    }

    /// Load config from the default path, or return defaults if it is missing
    /// or unreadable.
    pub fn load() -> Self {
        let path = Self::config_path();

        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Load and validate config from a specific file.
    pub fn load_from(path: &Path) -> OmniResult<Self> {
        let content = fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;
        config.validate();
        debug!(
            path = %path.display(),
            site_actions = config.site_actions.len(),
            "Loaded config"
        );
        Ok(config)
    }

    /// Validate and clamp config values to acceptable ranges
    fn validate(&mut self) {
        // Clamp max_results to reasonable range (1 - 500)
        self.search.max_results = self.search.max_results.clamp(1, 500);

        // Keywords are matched case-insensitively
        for action in &mut self.site_actions {
            action.keyword = action.keyword.trim().to_lowercase();
        }
        self.site_actions.retain(|a| !a.keyword.is_empty() && !a.url.is_empty());
    }

    /// Save config to a specific file, creating parent directories.
    pub fn save_to(&self, path: &Path) -> OmniResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;

        Ok(())
    }
}
