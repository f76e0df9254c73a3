//! Credentials and settings files
//!
//! Both files are TOML:
//!
//! ```toml
//! # creds.toml
//! openrouter_api_key = "sk-or-..."
//!
//! # config.toml
//! lyric_model = "anthropic/claude-3.5-sonnet"
//! api_base_url = "https://openrouter.ai/api/v1"  # optional
//! ```

use crate::error::ConfigError;
use crate::llm::OPENROUTER_BASE_URL;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable that overrides the credentials file
pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// Default credentials file name
pub const DEFAULT_CREDS_PATH: &str = "creds.toml";

/// Default settings file name
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// API credentials
#[derive(Clone, Deserialize)]
pub struct Credentials {
    pub openrouter_api_key: String,
}

impl Credentials {
    /// Load credentials, preferring `OPENROUTER_API_KEY` over the file
    ///
    /// The file is not read at all when the variable is set and non-blank.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path.as_ref(), std::env::var(API_KEY_ENV).ok())
    }

    fn load_with_env(path: &Path, env_key: Option<String>) -> Result<Self, ConfigError> {
        if let Some(key) = env_key.filter(|k| !k.trim().is_empty()) {
            debug!(var = API_KEY_ENV, "Using API key from environment");
            return Ok(Self {
                openrouter_api_key: key.trim().to_string(),
            });
        }

        let creds: Credentials = read_toml(path)?;
        if creds.openrouter_api_key.trim().is_empty() {
            return Err(ConfigError::EmptyValue {
                path: path.to_path_buf(),
                field: "openrouter_api_key",
            });
        }
        debug!(path = %path.display(), "Loaded credentials");
        Ok(Self {
            openrouter_api_key: creds.openrouter_api_key.trim().to_string(),
        })
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials").finish_non_exhaustive()
    }
}

/// Model selection and endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Model identifier used for both style and lyrics requests
    pub lyric_model: String,

    /// Chat-completion API base URL
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

fn default_api_base_url() -> String {
    OPENROUTER_BASE_URL.to_string()
}

impl Settings {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let settings: Settings = read_toml(path)?;
        if settings.lyric_model.trim().is_empty() {
            return Err(ConfigError::EmptyValue {
                path: path.to_path_buf(),
                field: "lyric_model",
            });
        }
        debug!(path = %path.display(), model = %settings.lyric_model, "Loaded settings");
        Ok(settings)
    }
}

fn read_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ConfigError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ConfigError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: PathBuf::from(path),
        source,
    })
}
