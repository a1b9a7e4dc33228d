//! Settings loaded from a JSON file in the working directory.
//!
//! The file must contain at least the key `API_KEY`. There is no default
//! and no environment-variable fallback; a missing or empty key fails the
//! run before any network activity.

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("settings file {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("API key not found in {path} (expected a non-empty string under \"API_KEY\")")]
    MissingKey { path: PathBuf },
}

/// Process-wide configuration, loaded once at startup and passed by value.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: String,
}

impl Settings {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let root: Value = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        match root.get("API_KEY").and_then(Value::as_str) {
            Some(key) if !key.trim().is_empty() => Ok(Self {
                api_key: key.to_string(),
            }),
            _ => Err(ConfigError::MissingKey {
                path: path.to_path_buf(),
            }),
        }
    }
}
