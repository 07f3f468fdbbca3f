use serde::{Deserialize, Serialize};

use super::defaults::*;

/// Channel configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChannelConfig {
    #[serde(default)]
    pub console: ConsoleConfig,
}

/// Local console channel (stdin/stdout).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Sender ID assigned to console input. Keys the namespace preference.
    #[serde(default = "default_console_user_id")]
    pub user_id: String,
    #[serde(default)]
    pub user_name: Option<String>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            user_id: default_console_user_id(),
            user_name: None,
        }
    }
}
