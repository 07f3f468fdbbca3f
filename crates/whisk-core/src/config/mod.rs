mod channels;
mod defaults;


pub use channels::*;

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::error::WhiskError;
use defaults::*;

/// Environment variables that override `[whisk]` values when set and non-empty.
pub const ENV_ENDPOINT: &str = "WHISK_ENDPOINT";
pub const ENV_ORG: &str = "WHISK_ORG";
pub const ENV_SPACE: &str = "WHISK_SPACE";
pub const ENV_TOKEN: &str = "WHISK_TOKEN";

/// Top-level whisk configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub bot: BotConfig,
    #[serde(default)]
    pub whisk: WhiskConfig,
    #[serde(default)]
    pub memory: MemoryConfig,
    #[serde(default)]
    pub channel: ChannelConfig,
}

/// General bot settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    /// Name shown in help text.
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Response language (English, Spanish, Portuguese).
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            language: default_language(),
        }
    }
}

/// OpenWhisk control-plane settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhiskConfig {
    /// Base URL of the platform API, e.g. `https://api.ng.bluemix.net`.
    #[serde(default)]
    pub endpoint: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub space: String,
    /// Credential sent as `Authorization: Basic {credential}`. Empty = not configured.
    #[serde(default)]
    pub credential: String,
    /// Per-request timeout. 0 keeps the transport default (no timeout).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for WhiskConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            organization: String::new(),
            space: String::new(),
            credential: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl WhiskConfig {
    /// Effective OpenWhisk base URL: the first `/api` in the endpoint becomes
    /// `/openwhisk`, trailing slashes are dropped.
    pub fn base_url(&self) -> String {
        self.endpoint
            .replacen("/api", "/openwhisk", 1)
            .trim_end_matches('/')
            .to_string()
    }

    /// Namespace used by users without a preference: `{organization}_{space}`.
    pub fn default_namespace(&self) -> String {
        format!("{}_{}", self.organization, self.space)
    }

    /// The configured credential, if any.
    pub fn credential(&self) -> Option<&str> {
        Some(self.credential.as_str()).filter(|c| !c.is_empty())
    }

    /// Overlay values from `lookup` (normally the process environment).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        if let Some(v) = get(ENV_ENDPOINT) {
            self.endpoint = v;
        }
        if let Some(v) = get(ENV_ORG) {
            self.organization = v;
        }
        if let Some(v) = get(ENV_SPACE) {
            self.space = v;
        }
        if let Some(v) = get(ENV_TOKEN) {
            self.credential = v;
        }
    }
}

/// Memory config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryConfig {
    #[serde(default = "default_db_path")]
    pub db_path: String,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
        }
    }
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// Load configuration from a TOML file, then apply environment overrides.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, WhiskError> {
    let mut config = read_file(Path::new(path))?;
    config
        .whisk
        .apply_overrides(|key| std::env::var(key).ok());
    Ok(config)
}

fn read_file(path: &Path) -> Result<Config, WhiskError> {
    if !path.exists() {
        info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| WhiskError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    toml::from_str(&content)
        .map_err(|e| WhiskError::Config(format!("failed to parse config: {}", e)))
}
