//! Entities exchanged with the control plane and the preference store.

use serde::{Deserialize, Serialize};

/// A deployed serverless function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub publish: bool,
}

/// Raw response of an invoke call.
///
/// Only `activation_id` is interpreted; everything else the backend sends is
/// kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivationResult {
    #[serde(
        rename = "activationId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub activation_id: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ActivationResult {
    /// Whether the backend accepted the invocation.
    pub fn is_accepted(&self) -> bool {
        self.activation_id.as_deref().is_some_and(|id| !id.is_empty())
    }
}

/// A user's chosen active namespace. One record per user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespacePreference {
    pub user_id: String,
    pub namespace: String,
}
