use crate::{
    error::WhiskError,
    message::{IncomingMessage, OutgoingMessage},
    model::{Action, ActivationResult, NamespacePreference},
};
use async_trait::async_trait;

/// Remote action service: the control plane holding namespaces and actions.
///
/// Implemented over HTTP by `whisk-client`; tests swap in fakes.
#[async_trait]
pub trait ActionService: Send + Sync {
    /// All namespaces visible to the configured credential, in backend order.
    async fn list_namespaces(&self) -> Result<Vec<String>, WhiskError>;

    /// All actions in `namespace`. Never cached.
    async fn list_actions(&self, namespace: &str) -> Result<Vec<Action>, WhiskError>;

    /// Invoke `action` in `namespace`. An empty `body` is not sent.
    async fn invoke(
        &self,
        action: &str,
        namespace: &str,
        body: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<ActivationResult, WhiskError>;
}

/// Per-user namespace preference storage.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// The stored preference for `user_id`, if any.
    async fn get(&self, user_id: &str) -> Result<Option<NamespacePreference>, WhiskError>;

    /// Write a preference, replacing any previous record for the same user.
    async fn set(&self, preference: NamespacePreference) -> Result<(), WhiskError>;
}

/// Messaging channel trait.
///
/// Every chat surface implements this trait to receive and send messages.
#[async_trait]
pub trait Channel: Send + Sync {
    /// Human-readable channel name.
    fn name(&self) -> &str;

    /// Start listening for incoming messages.
    /// Returns a receiver that yields incoming messages.
    async fn start(&self) -> Result<tokio::sync::mpsc::Receiver<IncomingMessage>, WhiskError>;

    /// Send a response back through this channel.
    async fn send(&self, message: OutgoingMessage) -> Result<(), WhiskError>;

    /// Graceful shutdown.
    async fn stop(&self) -> Result<(), WhiskError>;
}
