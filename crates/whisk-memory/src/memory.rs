//! In-process preference store. Lost on exit.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use whisk_core::{error::WhiskError, model::NamespacePreference, traits::PreferenceStore};

/// `PreferenceStore` kept in a map, for one-shot runs and tests.
#[derive(Default)]
pub struct MemoryPreferences {
    prefs: RwLock<HashMap<String, NamespacePreference>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PreferenceStore for MemoryPreferences {
    async fn get(&self, user_id: &str) -> Result<Option<NamespacePreference>, WhiskError> {
        Ok(self.prefs.read().await.get(user_id).cloned())
    }

    async fn set(&self, preference: NamespacePreference) -> Result<(), WhiskError> {
        self.prefs
            .write()
            .await
            .insert(preference.user_id.clone(), preference);
        Ok(())
    }
}
