//! Per-user namespace preferences.

use super::Store;
use async_trait::async_trait;
use whisk_core::{error::WhiskError, model::NamespacePreference, traits::PreferenceStore};

impl Store {
    /// Number of users with a stored preference.
    pub async fn preference_count(&self) -> Result<i64, WhiskError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM namespace_preferences")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| WhiskError::Memory(format!("query failed: {e}")))?;
        Ok(count)
    }
}

#[async_trait]
impl PreferenceStore for Store {
    async fn get(&self, user_id: &str) -> Result<Option<NamespacePreference>, WhiskError> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT namespace FROM namespace_preferences WHERE user_id = ?")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| WhiskError::Memory(format!("query failed: {e}")))?;

        Ok(row.map(|(namespace,)| NamespacePreference {
            user_id: user_id.to_string(),
            namespace,
        }))
    }

    async fn set(&self, preference: NamespacePreference) -> Result<(), WhiskError> {
        sqlx::query(
            "INSERT INTO namespace_preferences (user_id, namespace) VALUES (?, ?) \
             ON CONFLICT(user_id) DO UPDATE SET namespace = excluded.namespace, updated_at = datetime('now')",
        )
        .bind(&preference.user_id)
        .bind(&preference.namespace)
        .execute(&self.pool)
        .await
        .map_err(|e| WhiskError::Memory(format!("upsert preference failed: {e}")))?;

        Ok(())
    }
}
