//! Gateway: the main event loop connecting channels to the command facade.

#[cfg(test)]
mod tests;

use crate::commands::{self, Command, CommandContext};
use crate::i18n;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info, warn};
use whisk_core::{
    message::{IncomingMessage, OutgoingMessage},
    resolver::NamespaceResolver,
    traits::{ActionService, Channel},
};
use whisk_memory::ActivityLogger;

/// Routes incoming chat messages to bot commands and sends the replies back.
pub struct Gateway {
    resolver: NamespaceResolver,
    service: Arc<dyn ActionService>,
    channels: HashMap<String, Arc<dyn Channel>>,
    activity: Option<ActivityLogger>,
    bot_name: String,
    lang: String,
}

impl Gateway {
    /// Create a new gateway.
    pub fn new(
        resolver: NamespaceResolver,
        service: Arc<dyn ActionService>,
        channels: HashMap<String, Arc<dyn Channel>>,
        activity: Option<ActivityLogger>,
        bot_name: String,
        lang: String,
    ) -> Self {
        Self {
            resolver,
            service,
            channels,
            activity,
            bot_name,
            lang,
        }
    }

    /// Run the main event loop until Ctrl-C or until every channel closes.
    ///
    /// Messages are handled one at a time, in arrival order.
    pub async fn run(&self) -> anyhow::Result<()> {
        self.run_until(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("failed to listen for Ctrl-C: {e}");
                std::future::pending::<()>().await;
            }
            info!("Received shutdown signal");
        })
        .await
    }

    /// Run the main event loop until `shutdown` completes or every channel closes.
    pub async fn run_until<F>(&self, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()>,
    {
        info!(
            "whisk gateway running | default namespace: {} | channels: {}",
            self.resolver.default_namespace(),
            self.channels.keys().cloned().collect::<Vec<_>>().join(", "),
        );

        let (tx, mut rx) = mpsc::channel::<IncomingMessage>(256);

        for (name, channel) in &self.channels {
            let mut channel_rx = channel
                .start()
                .await
                .map_err(|e| anyhow::anyhow!("failed to start channel {name}: {e}"))?;
            let tx = tx.clone();
            let channel_name = name.clone();

            tokio::spawn(async move {
                while let Some(msg) = channel_rx.recv().await {
                    if tx.send(msg).await.is_err() {
                        info!("gateway receiver dropped, stopping {channel_name} forwarder");
                        break;
                    }
                }
            });

            info!("Channel started: {name}");
        }

        drop(tx);
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                incoming = rx.recv() => match incoming {
                    Some(incoming) => self.handle_message(&incoming).await,
                    None => {
                        info!("All channels closed");
                        break;
                    }
                },
                _ = &mut shutdown => break,
            }
        }

        self.shutdown().await;
        Ok(())
    }

    /// Handle one message and send every reply back to its sender.
    async fn handle_message(&self, incoming: &IncomingMessage) {
        for reply in self.dispatch(incoming).await {
            self.send_text(incoming, &reply).await;
        }
    }

    /// Turn a message into its replies. Unrecognized text gets a help hint.
    pub async fn dispatch(&self, incoming: &IncomingMessage) -> Vec<String> {
        let Some(cmd) = Command::parse(&incoming.text) else {
            info!(
                "unrecognized message from {}:{}",
                incoming.channel, incoming.sender_id
            );
            return vec![i18n::t("unknown_command", &self.lang).to_string()];
        };

        let ctx = CommandContext {
            resolver: &self.resolver,
            service: self.service.as_ref(),
            activity: self.activity.as_ref(),
            channel: &incoming.channel,
            sender_id: &incoming.sender_id,
            sender_name: incoming.sender_name.as_deref(),
            bot_name: &self.bot_name,
            lang: &self.lang,
        };
        commands::handle(cmd, &ctx).await
    }

    async fn shutdown(&self) {
        info!("Shutting down...");
        for (name, channel) in &self.channels {
            if let Err(e) = channel.stop().await {
                warn!("failed to stop channel {name}: {e}");
            }
        }
        info!("Shutdown complete.");
    }

    /// Send a plain text message back to the sender.
    async fn send_text(&self, incoming: &IncomingMessage, text: &str) {
        let msg = OutgoingMessage {
            text: text.to_string(),
        };

        if let Some(channel) = self.channels.get(&incoming.channel) {
            if let Err(e) = channel.send(msg).await {
                error!("failed to send message: {e}");
            }
        }
    }
}
