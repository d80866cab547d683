//! Runtime settings and the builder that resolves them.
//!
//! Settings come from, in increasing precedence: built-in defaults, a JSON
//! config file (`--config`, or `$XDG_CONFIG_HOME/simmer/config.json` when
//! present) and explicit overrides set on the builder.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{IoResultExt, Result, SimmerError};

/// Longest listening window a config file may ask for.
pub const MAX_LISTEN_TIMEOUT_SECS: u64 = 3600;

/// Tunables for cooking sessions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Length of one countdown tick in milliseconds
    pub tick_millis: u64,
    /// How long a listening window stays open, in seconds
    pub listen_timeout_secs: u64,
    /// Default shelf life for scanned groceries, in days
    pub shelf_life_days: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_millis: 1000,
            listen_timeout_secs: 10,
            shelf_life_days: 7,
        }
    }
}

impl Settings {
    /// Read settings from a JSON file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).fs_context(path)?;
        let settings: Settings = serde_json::from_str(&text).map_err(|e| {
            SimmerError::Configuration {
                message: format!("Invalid config file '{}': {e}", path.display()),
            }
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values that would stall the countdown or overflow deadlines.
    pub fn validate(&self) -> Result<()> {
        if self.tick_millis == 0 {
            return Err(SimmerError::Configuration {
                message: "tick_millis must be at least 1".to_string(),
            });
        }
        if !(1..=MAX_LISTEN_TIMEOUT_SECS).contains(&self.listen_timeout_secs) {
            return Err(SimmerError::Configuration {
                message: format!(
                    "listen_timeout_secs must be between 1 and {MAX_LISTEN_TIMEOUT_SECS}"
                ),
            });
        }
        Ok(())
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }

    pub fn listen_timeout(&self) -> Duration {
        Duration::from_secs(self.listen_timeout_secs)
    }
}

/// Builder for resolving [`Settings`].
#[derive(Debug, Clone, Default)]
pub struct SettingsBuilder {
    config_path: Option<PathBuf>,
    tick_millis: Option<u64>,
}

impl SettingsBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an explicit config file, which must exist.
    ///
    /// If not specified, uses `$XDG_CONFIG_HOME/simmer/config.json` when it
    /// exists and built-in defaults otherwise.
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.config_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Overrides the tick length from the config file.
    pub fn with_tick_millis(mut self, tick_millis: Option<u64>) -> Self {
        if tick_millis.is_some() {
            self.tick_millis = tick_millis;
        }
        self
    }

    /// Builds the resolved settings.
    ///
    /// # Errors
    ///
    /// Returns `SimmerError::FileSystem` if an explicit config file cannot be
    /// read and `SimmerError::Configuration` if its contents are invalid.
    pub fn build(self) -> Result<Settings> {
        let path = self.config_path.or_else(Self::default_config_path);

        let mut settings = match path {
            Some(path) => {
                debug!("Loading settings from {}", path.display());
                Settings::from_file(&path)?
            }
            None => Settings::default(),
        };

        if let Some(tick_millis) = self.tick_millis {
            settings.tick_millis = tick_millis;
        }
        settings.validate()?;
        Ok(settings)
    }

    /// Returns the config file location following the XDG Base Directory
    /// specification, if a file exists there.
    fn default_config_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("simmer").find_config_file("config.json")
    }
}
