//! Sanitization of backend error text before it reaches a user.
//!
//! Authentication failures are replaced by a fixed hint about the credential
//! configuration so backend internals never leak into chat.

use serde_json::Value;

/// Replacement for any error mentioning authentication.
pub const AUTH_FAILED: &str = "Authentication failed. Check that WHISK_TOKEN \
     (or whisk.credential in config.toml) is set to a valid token.";

/// Replacement for an absent or empty error value.
pub const UNKNOWN_ERROR: &str = "Unknown error.";

/// Rewrite a raw backend error string into a user-safe message.
pub fn error_message(raw: Option<&str>) -> String {
    match raw {
        None | Some("") => UNKNOWN_ERROR.to_string(),
        Some(msg) if msg.contains("authentication") => AUTH_FAILED.to_string(),
        Some(msg) => msg.to_string(),
    }
}

/// Same rule applied to an arbitrary JSON `error` field.
pub fn error_value(value: &Value) -> String {
    match value {
        Value::Null => error_message(None),
        Value::String(s) => error_message(Some(s)),
        other => error_message(Some(&other.to_string())),
    }
}

/// Whether a JSON `error` field should be treated as an error at all.
///
/// `null`, `false`, `""` and `0` do not count.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}
