//! Config file parsing for `~/.config/vgmdb-lookup/config.toml`.
//!
//! ```toml
//! [vgmdb]
//! source_weight = 1.0
//! lang-priority = "ja, en, ja-latn"
//! base_url = "http://vgmdb.info"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::lang::{LangPriority, DEFAULT_LANG_PRIORITY};

pub const DEFAULT_BASE_URL: &str = "http://vgmdb.info";
pub const DEFAULT_SOURCE_WEIGHT: f64 = 1.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub vgmdb: VgmdbConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VgmdbConfig {
    /// Weight of the `source` penalty added to VGMdb candidates.
    #[serde(default = "default_source_weight")]
    pub source_weight: f64,
    /// Comma-separated language codes, most preferred first.
    #[serde(rename = "lang-priority", default = "default_lang_priority")]
    pub lang_priority: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_source_weight() -> f64 {
    DEFAULT_SOURCE_WEIGHT
}
fn default_lang_priority() -> String {
    DEFAULT_LANG_PRIORITY.to_string()
}
fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for VgmdbConfig {
    fn default() -> Self {
        Self {
            source_weight: DEFAULT_SOURCE_WEIGHT,
            lang_priority: DEFAULT_LANG_PRIORITY.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl VgmdbConfig {
    pub fn lang_priority(&self) -> LangPriority {
        LangPriority::parse(&self.lang_priority)
    }
}

impl AppConfig {
    /// Set a value by dot-separated key, e.g. `vgmdb.source_weight`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let parts: Vec<&str> = key.splitn(2, '.').collect();
        match parts.as_slice() {
            ["vgmdb", sub] => match *sub {
                "source_weight" => {
                    self.vgmdb.source_weight = value.parse().map_err(|_| ConfigError::InvalidValue {
                        key: key.to_string(),
                        value: value.to_string(),
                    })?
                }
                "lang-priority" | "lang_priority" => self.vgmdb.lang_priority = value.to_string(),
                "base_url" => self.vgmdb.base_url = value.trim_end_matches('/').to_string(),
                _ => return Err(ConfigError::UnknownKey(key.to_string())),
            },
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Load config from the default path. A missing or broken file yields defaults.
pub fn load_config() -> AppConfig {
    let Some(path) = config_path() else {
        return AppConfig::default();
    };
    if !path.exists() {
        return AppConfig::default();
    }
    match load_config_from(&path) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::warn!("Ignoring config file {}: {}", path.display(), e);
            AppConfig::default()
        }
    }
}

/// Load config from an explicit path, reporting read and parse errors.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str::<AppConfig>(&content)?)
}

/// Write config to `path`, creating parent directories.
pub fn save_config(cfg: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, cfg.to_toml()?)?;
    Ok(())
}

/// Return the default config file path (for init and show).
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut p| {
        p.push("vgmdb-lookup");
        p.push("config.toml");
        p
    })
}
