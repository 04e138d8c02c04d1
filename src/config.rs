use crate::app::{Theme, DEFAULT_SUGGEST_CUTOFF};
use crate::error::{RollError, RollResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Persisted theme preference
    pub theme: Theme,
    pub log_level: String,
    pub prompt: String,
    /// Minimum similarity for "did you mean" hints
    pub suggest_cutoff: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            log_level: "INFO".to_string(),
            prompt: "rollcall> ".to_string(),
            suggest_cutoff: DEFAULT_SUGGEST_CUTOFF,
        }
    }
}

impl Config {
    /// Load config from the default location, or fall back to defaults
    pub fn load() -> RollResult<Self> {
        Self::load_from(&config_path())
    }

    /// Load config from `path`
    ///
    /// A missing file gives defaults and missing keys take their default
    /// values. A corrupt file is moved aside to `*.json.corrupt` and
    /// defaults are used. An out-of-range cutoff falls back to the default
    /// cutoff and keeps the rest of the file.
    pub fn load_from(path: &Path) -> RollResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        match serde_json::from_str::<Config>(&content) {
            Ok(mut config) => {
                if let Err(e) = config.validate() {
                    tracing::warn!("⚠️ {}, using {}", e, DEFAULT_SUGGEST_CUTOFF);
                    config.suggest_cutoff = DEFAULT_SUGGEST_CUTOFF;
                }
                Ok(config)
            }
            Err(e) => {
                tracing::warn!("⚠️ Config file corrupted or invalid, using defaults: {}", e);
                let backup_path = path.with_extension("json.corrupt");
                let _ = std::fs::rename(path, &backup_path);
                Ok(Self::default())
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> RollResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::debug!("💾 Config saved to {}", path.display());
        Ok(())
    }

    fn validate(&self) -> RollResult<()> {
        if !(0.0..=1.0).contains(&self.suggest_cutoff) {
            return Err(RollError::Config(format!(
                "suggest_cutoff must be between 0 and 1, got {}",
                self.suggest_cutoff
            )));
        }
        Ok(())
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("rollcall")
        .join("config.json")
}
