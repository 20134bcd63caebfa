//! Host configuration loaded from TOML.
//!
//! The `[wiki]` table maps directly onto [`wiki_resolve::WikiConfig`]; any
//! field left out keeps its default.
//!
//! ```toml
//! log_filter = "wikibot=debug,wiki_resolve=debug"
//!
//! [wiki]
//! default_language = "en"
//! timeout_seconds = 2
//!
//! [wiki.endpoints]
//! rest_base = "https://{lang}.wikipedia.org/api/rest_v1"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use wiki_resolve::WikiConfig;

use crate::error::{BotError, Result};

/// Default tracing filter when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "wikibot=info,wiki_resolve=info";

/// Top-level host configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Tracing filter directive, e.g. `wiki_resolve=debug`.
    pub log_filter: String,
    /// Lookup client settings.
    pub wiki: WikiConfig,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.into(),
            wiki: WikiConfig::default(),
        }
    }
}

impl BotConfig {
    /// Load configuration from a TOML file, falling back to defaults for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| BotError::Config(e.to_string()))
    }

    /// Load from `path` if given, otherwise from the default location if a
    /// file exists there, otherwise defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a file exists but cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Self::default_config_path();
                if default_path.is_file() {
                    Self::from_file(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| BotError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the default config file path: `~/.config/wikibot/config.toml`.
    pub fn default_config_path() -> PathBuf {
        if let Some(config) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(config).join("wikibot").join("config.toml")
        } else if let Some(dir) = dirs::config_dir() {
            dir.join("wikibot").join("config.toml")
        } else {
            PathBuf::from("/tmp/wikibot-config/config.toml")
        }
    }
}
