//! Console channel: one chat line per stdin line, replies on stdout.
//!
//! All input is attributed to the configured console user, so namespace
//! preferences set from the console persist across runs.
//!
//! Stdin is read on a dedicated OS thread. A blocking read cannot be
//! cancelled, and a detached thread does not hold up runtime shutdown the way
//! a `spawn_blocking` read does.

use async_trait::async_trait;
use chrono::Utc;
use std::io::BufRead;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use uuid::Uuid;
use whisk_core::{
    config::ConsoleConfig,
    error::WhiskError,
    message::{IncomingMessage, OutgoingMessage},
    traits::Channel,
};

type Reader = Box<dyn AsyncBufRead + Send + Unpin>;
type BlockingReader = Box<dyn BufRead + Send>;
type Writer = Box<dyn AsyncWrite + Send + Unpin>;

/// Where console lines come from.
enum Input {
    /// Read on a detached thread; abandoned on `stop`.
    Blocking(BlockingReader),
    /// Read on a tokio task; aborted on `stop`.
    Async(Reader),
}

/// Channel reading from stdin and writing to stdout.
pub struct ConsoleChannel {
    config: ConsoleConfig,
    /// Taken by the first `start()`.
    input: Mutex<Option<Input>>,
    writer: Mutex<Writer>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl ConsoleChannel {
    /// Create a console channel on the process stdin/stdout.
    pub fn new(config: ConsoleConfig) -> Self {
        Self::build(
            config,
            Input::Blocking(Box::new(std::io::BufReader::new(std::io::stdin()))),
            Box::new(tokio::io::stdout()),
        )
    }

    /// Create a console channel over arbitrary streams.
    pub fn with_io(config: ConsoleConfig, reader: Reader, writer: Writer) -> Self {
        Self::build(config, Input::Async(reader), writer)
    }

    fn build(config: ConsoleConfig, input: Input, writer: Writer) -> Self {
        Self {
            config,
            input: Mutex::new(Some(input)),
            writer: Mutex::new(writer),
            task: Mutex::new(None),
        }
    }

    /// Build a message from a raw line. Blank lines yield nothing.
    fn to_message(line: &str, sender_id: &str, sender_name: &Option<String>) -> Option<IncomingMessage> {
        let text = line.trim();
        if text.is_empty() {
            return None;
        }
        Some(IncomingMessage {
            id: Uuid::new_v4(),
            channel: "console".to_string(),
            sender_id: sender_id.to_string(),
            sender_name: sender_name.clone(),
            text: text.to_string(),
            timestamp: Utc::now(),
        })
    }
}

/// Blocking read loop, run on its own thread.
fn read_blocking(
    mut reader: BlockingReader,
    tx: mpsc::Sender<IncomingMessage>,
    sender_id: String,
    sender_name: Option<String>,
) {
    let mut line = String::new();
    loop {
        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => {
                debug!("console: end of input");
                break;
            }
            Ok(_) => {}
            Err(e) => {
                warn!("console read error: {e}");
                break;
            }
        }
        let Some(msg) = ConsoleChannel::to_message(&line, &sender_id, &sender_name) else {
            continue;
        };
        if tx.blocking_send(msg).is_err() {
            break;
        }
    }
}

#[async_trait]
impl Channel for ConsoleChannel {
    fn name(&self) -> &str {
        "console"
    }

    async fn start(&self) -> Result<mpsc::Receiver<IncomingMessage>, WhiskError> {
        let input = self
            .input
            .lock()
            .await
            .take()
            .ok_or_else(|| WhiskError::Channel("console already started".to_string()))?;

        let (tx, rx) = mpsc::channel(64);
        let sender_id = self.config.user_id.clone();
        let sender_name = self.config.user_name.clone();

        info!("Console channel listening on stdin as {sender_id}");

        match input {
            Input::Blocking(reader) => {
                std::thread::Builder::new()
                    .name("whisk-console".to_string())
                    .spawn(move || read_blocking(reader, tx, sender_id, sender_name))?;
            }
            Input::Async(mut reader) => {
                let handle = tokio::spawn(async move {
                    let mut line = String::new();
                    loop {
                        line.clear();
                        match reader.read_line(&mut line).await {
                            Ok(0) => {
                                debug!("console: end of input");
                                break;
                            }
                            Ok(_) => {}
                            Err(e) => {
                                warn!("console read error: {e}");
                                break;
                            }
                        }
                        let Some(msg) = Self::to_message(&line, &sender_id, &sender_name) else {
                            continue;
                        };
                        if tx.send(msg).await.is_err() {
                            break;
                        }
                    }
                });
                *self.task.lock().await = Some(handle);
            }
        }

        Ok(rx)
    }

    async fn send(&self, message: OutgoingMessage) -> Result<(), WhiskError> {
        let mut writer = self.writer.lock().await;
        writer.write_all(message.text.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
        Ok(())
    }

    async fn stop(&self) -> Result<(), WhiskError> {
        if let Some(handle) = self.task.lock().await.take() {
            handle.abort();
        }
        info!("Console channel stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::io::AsyncReadExt;

    fn config() -> ConsoleConfig {
        ConsoleConfig {
            enabled: true,
            user_id: "ops".to_string(),
            user_name: Some("Ops".to_string()),
        }
    }

    #[tokio::test]
    async fn test_lines_become_messages() {
        let input: &'static [u8] = b"openwhisk help\n\n  /namespaces  \n";
        let channel =
            ConsoleChannel::with_io(config(), Box::new(input), Box::new(tokio::io::sink()));

        let mut rx = channel.start().await.unwrap();
        let first = rx.recv().await.unwrap();
        assert_eq!(first.text, "openwhisk help");
        assert_eq!(first.sender_id, "ops");
        assert_eq!(first.sender_name.as_deref(), Some("Ops"));
        assert_eq!(first.channel, "console");

        let second = rx.recv().await.unwrap();
        assert_eq!(second.text, "/namespaces");

        // EOF closes the receiver.
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_blocking_input_runs_on_thread() {
        let input = std::io::Cursor::new(b"openwhisk namespace\n\n/actions\n".to_vec());
        let channel = ConsoleChannel::build(
            config(),
            Input::Blocking(Box::new(input)),
            Box::new(tokio::io::sink()),
        );

        let mut rx = channel.start().await.unwrap();
        assert_eq!(rx.recv().await.unwrap().text, "openwhisk namespace");
        assert_eq!(rx.recv().await.unwrap().text, "/actions");
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_stop_closes_pending_input() {
        // The write half stays open, so the read never completes on its own.
        let (_keep_open, reader) = tokio::io::duplex(64);
        let channel = ConsoleChannel::with_io(
            config(),
            Box::new(tokio::io::BufReader::new(reader)),
            Box::new(tokio::io::sink()),
        );

        let mut rx = channel.start().await.unwrap();
        channel.stop().await.unwrap();
        let closed = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("stop should end the reader");
        assert!(closed.is_none());
    }

    #[tokio::test]
    async fn test_start_twice_fails() {
        let input: &'static [u8] = b"";
        let channel =
            ConsoleChannel::with_io(config(), Box::new(input), Box::new(tokio::io::sink()));
        let _rx = channel.start().await.unwrap();
        assert!(matches!(
            channel.start().await,
            Err(WhiskError::Channel(_))
        ));
        channel.stop().await.unwrap();
    }

    #[tokio::test]
    async fn test_send_writes_line() {
        let (client, mut server) = tokio::io::duplex(256);
        let input: &'static [u8] = b"";
        let channel = ConsoleChannel::with_io(config(), Box::new(input), Box::new(client));

        channel
            .send(OutgoingMessage {
                text: "Namespaces:\nns1".to_string(),
            })
            .await
            .unwrap();
        drop(channel);

        let mut out = String::new();
        server.read_to_string(&mut out).await.unwrap();
        assert_eq!(out, "Namespaces:\nns1\n");
    }
}
