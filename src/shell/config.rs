//! Service configuration read from the environment.
//!
//! Every key is optional. `AppConfig::from_lookup` takes the lookup function so
//! tests can supply values without touching the process environment.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::modules::distribution::core::agent::NewAgent;

pub const ADDR_KEY: &str = "ENTRY_DISTRIBUTION_ADDR";
pub const UPLOAD_DIR_KEY: &str = "ENTRY_DISTRIBUTION_UPLOAD_DIR";
pub const MAX_UPLOAD_BYTES_KEY: &str = "ENTRY_DISTRIBUTION_MAX_UPLOAD_BYTES";
pub const AGENTS_FILE_KEY: &str = "ENTRY_DISTRIBUTION_AGENTS_FILE";

const DEFAULT_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },

    #[error("cannot read agent roster {path}: {reason}")]
    RosterSeed { path: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
    /// JSON array of `{ name, email, phone }` registered at startup.
    pub agents_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr_value = lookup(ADDR_KEY).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_value.parse().map_err(|_| ConfigError::Invalid {
            key: ADDR_KEY,
            value: addr_value.clone(),
        })?;

        let max_upload_bytes = match lookup(MAX_UPLOAD_BYTES_KEY) {
            Some(value) => match value.parse::<usize>() {
                Ok(bytes) if bytes > 0 => bytes,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: MAX_UPLOAD_BYTES_KEY,
                        value,
                    });
                }
            },
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        let upload_dir = lookup(UPLOAD_DIR_KEY)
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::temp_dir().join("entry_distribution"));

        let agents_file = lookup(AGENTS_FILE_KEY)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            addr,
            upload_dir,
            max_upload_bytes,
            agents_file,
        })
    }
}

pub fn load_roster_seed(path: &Path) -> Result<Vec<NewAgent>, ConfigError> {
    let seed_error = |reason: String| ConfigError::RosterSeed {
        path: path.display().to_string(),
        reason,
    };
    let raw = std::fs::read_to_string(path).map_err(|e| seed_error(e.to_string()))?;
    serde_json::from_str(&raw).map_err(|e| seed_error(e.to_string()))
}
