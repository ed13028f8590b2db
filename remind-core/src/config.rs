//! Global configuration at ~/.config/remind/config.toml.

use std::path::PathBuf;

use config::{Config, File};
use serde::Deserialize;

use crate::error::{RemindError, RemindResult};

static DEFAULT_STORE_PATH: &str = "events.txt";

fn default_store_path() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_PATH)
}

/// Global configuration for the remind CLI.
///
/// Only the store location lives here; everything about an event is in the
/// store file itself.
#[derive(Debug, Deserialize, Clone)]
pub struct GlobalConfig {
    /// Path of the event store file. Relative paths resolve against the
    /// working directory; `~` is expanded.
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        GlobalConfig {
            store_path: default_store_path(),
        }
    }
}

impl GlobalConfig {
    pub fn config_path() -> RemindResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| RemindError::Config("Could not determine config directory".to_string()))?
            .join("remind");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config; an absent file yields the defaults.
    pub fn load() -> RemindResult<Self> {
        let config_path = Self::config_path()?;

        let config: GlobalConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| RemindError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| RemindError::Config(e.to_string()))?;

        Ok(config)
    }

    /// Store path with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.store_path.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }
}
