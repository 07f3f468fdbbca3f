//! Per-user active namespace resolution.
//!
//! A user is either in the default state (no preference stored, resolves to
//! the configured default namespace) or overridden (resolves to the stored
//! namespace). Only a validated `set_namespace` moves a user between states;
//! there is no way back to the default.

use crate::{
    error::WhiskError,
    model::NamespacePreference,
    traits::{ActionService, PreferenceStore},
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Resolves and updates the namespace each user operates against.
#[derive(Clone)]
pub struct NamespaceResolver {
    default_namespace: String,
    store: Arc<dyn PreferenceStore>,
    service: Arc<dyn ActionService>,
}

impl NamespaceResolver {
    pub fn new(
        default_namespace: impl Into<String>,
        store: Arc<dyn PreferenceStore>,
        service: Arc<dyn ActionService>,
    ) -> Self {
        Self {
            default_namespace: default_namespace.into(),
            store,
            service,
        }
    }

    /// The namespace used when a user has no preference.
    pub fn default_namespace(&self) -> &str {
        &self.default_namespace
    }

    /// Resolve the active namespace for `user_id`. Never fails.
    ///
    /// Anonymous users, users without a preference, and store read failures
    /// all resolve to the default namespace.
    pub async fn active_namespace(&self, user_id: Option<&str>) -> String {
        let Some(user_id) = user_id.filter(|u| !u.is_empty()) else {
            return self.default_namespace.clone();
        };
        match self.store.get(user_id).await {
            Ok(Some(pref)) if !pref.namespace.is_empty() => pref.namespace,
            Ok(_) => self.default_namespace.clone(),
            Err(e) => {
                warn!("namespace preference lookup failed for {user_id}: {e}");
                self.default_namespace.clone()
            }
        }
    }

    /// Validate `name` against the live namespace list, then persist it as
    /// the user's preference.
    ///
    /// Fails with `NotFound` when the name is not listed, or with the client
    /// error when the list call fails. Either way nothing is written.
    pub async fn set_namespace(&self, user_id: &str, name: &str) -> Result<(), WhiskError> {
        let namespaces = self.service.list_namespaces().await?;
        debug!("validating namespace {name} against {} entries", namespaces.len());

        if !namespaces.iter().any(|ns| ns == name) {
            info!("namespace {name} not found for {user_id}");
            return Err(WhiskError::NotFound(name.to_string()));
        }

        self.store
            .set(NamespacePreference {
                user_id: user_id.to_string(),
                namespace: name.to_string(),
            })
            .await?;
        info!("active namespace for {user_id} set to {name}");
        Ok(())
    }
}
