//! # Configuration
//!
//! Settings live in `config.json` inside the config directory, resolved in
//! priority order:
//! 1. `--config-dir` on the command line
//! 2. The `SMARTLISTS_CONFIG_DIR` environment variable
//! 3. The OS config directory (via the `directories` crate)
//!
//! A missing file yields the defaults.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `legacy-book-fallback` | `false` | Read API filters with no source key as `book` filters |
//! | `pretty-json` | `true` | Indent JSON printed by the CLI |

use crate::error::{Result, SmartListError};
use crate::transform::SourceFallback;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
pub const CONFIG_DIR_ENV: &str = "SMARTLISTS_CONFIG_DIR";

pub const CONFIG_KEYS: &[&str] = &["legacy-book-fallback", "pretty-json"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SmartListConfig {
    /// Treat any API filter without a source key as a bare `book` field map,
    /// instead of only those whose field is a book attribute.
    #[serde(default)]
    pub legacy_book_fallback: bool,

    #[serde(default = "default_pretty_json")]
    pub pretty_json: bool,
}

fn default_pretty_json() -> bool {
    true
}

impl Default for SmartListConfig {
    fn default() -> Self {
        Self {
            legacy_book_fallback: false,
            pretty_json: default_pretty_json(),
        }
    }
}

impl SmartListConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: SmartListConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn source_fallback(&self) -> SourceFallback {
        if self.legacy_book_fallback {
            SourceFallback::Book
        } else {
            SourceFallback::BookCatalog
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "legacy-book-fallback" => Some(self.legacy_book_fallback.to_string()),
            "pretty-json" => Some(self.pretty_json.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        let flag = match value {
            "true" | "yes" | "on" => true,
            "false" | "no" | "off" => false,
            other => return Err(format!("Invalid value for {}: {}", key, other)),
        };
        match key {
            "legacy-book-fallback" => self.legacy_book_fallback = flag,
            "pretty-json" => self.pretty_json = flag,
            other => return Err(format!("Unknown config key: {}", other)),
        }
        Ok(())
    }
}

/// Resolve the config directory: explicit path, then environment, then OS default.
pub fn resolve_config_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "smartlists", "smartlists")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| SmartListError::Config("Could not determine config dir".to_string()))
}
