//! Serde default value functions for config structs.

pub(super) fn default_true() -> bool {
    true
}
pub(super) fn default_name() -> String {
    "whisk".to_string()
}
pub(super) fn default_data_dir() -> String {
    "~/.whisk".to_string()
}
pub(super) fn default_log_level() -> String {
    "info".to_string()
}
pub(super) fn default_language() -> String {
    "English".to_string()
}
pub(super) fn default_timeout_secs() -> u64 {
    60
}
pub(super) fn default_db_path() -> String {
    "~/.whisk/data/whisk.db".to_string()
}
pub(super) fn default_console_user_id() -> String {
    "local".to_string()
}
