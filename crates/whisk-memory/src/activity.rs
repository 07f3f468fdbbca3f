//! Activity log: records what the bot did on behalf of each user.

use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;
use whisk_core::error::WhiskError;

/// Activity identifiers written by the command handlers.
pub const LIST_NAMESPACES: &str = "activity.openwhisk.list.namespaces";
pub const LIST_ACTIONS: &str = "activity.openwhisk.list.actions";
pub const INVOKE_ACTION: &str = "activity.openwhisk.invoke.action";
pub const SET_NAMESPACE: &str = "activity.openwhisk.set.namespace";

/// An entry to write to the activity log.
pub struct ActivityEntry {
    pub channel: String,
    pub sender_id: String,
    pub activity_id: &'static str,
    /// Free-form detail, e.g. the invoked action or the new namespace.
    pub detail: Option<String>,
    pub status: ActivityStatus,
}

/// Outcome of a logged activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityStatus {
    Ok,
    Error,
}

impl ActivityStatus {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Error => "error",
        }
    }
}

/// Activity logger backed by SQLite.
#[derive(Clone)]
pub struct ActivityLogger {
    pool: SqlitePool,
}

impl ActivityLogger {
    /// Create a new activity logger sharing the given pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Write an entry to the activity log.
    pub async fn log(&self, entry: &ActivityEntry) -> Result<(), WhiskError> {
        let id = Uuid::new_v4().to_string();

        sqlx::query(
            "INSERT INTO activity_log (id, channel, sender_id, activity_id, detail, status) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&entry.channel)
        .bind(&entry.sender_id)
        .bind(entry.activity_id)
        .bind(&entry.detail)
        .bind(entry.status.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| WhiskError::Memory(format!("activity log write failed: {e}")))?;

        debug!(
            "activity: {} {} [{}] {}",
            entry.channel,
            entry.sender_id,
            entry.status.as_str(),
            entry.activity_id
        );

        Ok(())
    }

    /// Most recent activity IDs for a sender, newest first.
    pub async fn recent(&self, sender_id: &str, limit: i64) -> Result<Vec<String>, WhiskError> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT activity_id FROM activity_log WHERE sender_id = ? \
             ORDER BY created_at DESC, rowid DESC LIMIT ?",
        )
        .bind(sender_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| WhiskError::Memory(format!("query failed: {e}")))?;

        Ok(rows.into_iter().map(|(a,)| a).collect())
    }
}
