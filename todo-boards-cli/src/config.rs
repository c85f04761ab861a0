//! CLI configuration loaded with figment
//!
//! Sources, later overriding earlier:
//! 1. Defaults
//! 2. `boards.toml`, searched in the current directory and its parents
//! 3. `BOARDS_*` environment variables (`BOARDS_DATA_DIR`, `BOARDS_HISTORY_LIMIT`)
//!
//! Command-line flags are applied on top by the caller.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Name of the optional configuration file
pub const CONFIG_FILE_NAME: &str = "boards.toml";

/// Prefix for configuration environment variables
pub const ENV_PREFIX: &str = "BOARDS_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardsConfig {
    /// Directory holding boards.json
    pub data_dir: PathBuf,
    /// Maximum undo depth for a shell session; unbounded when absent
    #[serde(default)]
    pub history_limit: Option<usize>,
}

impl Default for BoardsConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".boards"),
            history_limit: None,
        }
    }
}

impl BoardsConfig {
    /// Build the layered figment without extracting it
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(CONFIG_FILE_NAME))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Load configuration from all sources
    pub fn load() -> Result<Self, figment::Error> {
        let config: Self = Self::figment().extract()?;
        debug!(?config, "loaded configuration");
        Ok(config)
    }
}
