//! Application configuration for webchurn.
//!
//! User config lives at `~/.webchurn/webchurn.toml`.
//! Values from the config file override the built-in defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, WebchurnError};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "webchurn.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".webchurn";

// ---------------------------------------------------------------------------
// Config structs (matching webchurn.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Page-fetching settings.
    #[serde(default)]
    pub fetch: FetchConfig,
}

/// `[fetch]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// User-Agent header sent with page requests.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum redirects to follow.
    #[serde(default = "default_redirect_limit")]
    pub redirect_limit: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            redirect_limit: default_redirect_limit(),
        }
    }
}

fn default_user_agent() -> String {
    "webchurner".into()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_redirect_limit() -> usize {
    5
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.webchurn/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| WebchurnError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.webchurn/webchurn.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| WebchurnError::io(path, e))?;

    toml::from_str(&content)
        .map_err(|e| WebchurnError::config(format!("failed to parse {}: {e}", path.display())))
}
