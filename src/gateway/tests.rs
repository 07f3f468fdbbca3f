use super::*;
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt, BufReader};
use whisk_channels::ConsoleChannel;
use whisk_client::WhiskClient;
use whisk_core::config::{ConsoleConfig, WhiskConfig};
use whisk_memory::MemoryPreferences;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const NS: &str = "testOrg_testSpace";

async fn mock_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/namespaces"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([NS, "namespace1"])))
        .mount(&server)
        .await;
    server
}

fn gateway(server: &MockServer, channels: HashMap<String, Arc<dyn Channel>>) -> Gateway {
    let config = WhiskConfig {
        endpoint: server.uri(),
        organization: "testOrg".to_string(),
        space: "testSpace".to_string(),
        credential: "tok".to_string(),
        timeout_secs: 5,
    };
    let client: Arc<dyn ActionService> = Arc::new(WhiskClient::from_config(&config).unwrap());
    let resolver = NamespaceResolver::new(
        config.default_namespace(),
        Arc::new(MemoryPreferences::new()),
        client.clone(),
    );
    Gateway::new(
        resolver,
        client,
        channels,
        None,
        "whisk".to_string(),
        "English".to_string(),
    )
}

fn console_config() -> ConsoleConfig {
    ConsoleConfig {
        enabled: true,
        user_id: "local".to_string(),
        user_name: None,
    }
}

#[tokio::test]
async fn test_dispatch_unknown_text_gets_hint() {
    let server = mock_server().await;
    let gw = gateway(&server, HashMap::new());
    let msg = IncomingMessage::new("console", "u1", "what's the weather?");
    assert_eq!(
        gw.dispatch(&msg).await,
        vec![i18n::t("unknown_command", "English")]
    );
}

#[tokio::test]
async fn test_dispatch_uses_sender_identity() {
    let server = mock_server().await;
    let gw = gateway(&server, HashMap::new());

    let set = IncomingMessage::new("console", "u1", "openwhisk use namespace namespace1");
    assert_eq!(
        gw.dispatch(&set).await,
        vec![i18n::namespace_new("English", "namespace1")]
    );

    let show_u1 = IncomingMessage::new("console", "u1", "openwhisk namespace");
    let show_u2 = IncomingMessage::new("console", "u2", "openwhisk namespace");
    assert_eq!(
        gw.dispatch(&show_u1).await,
        vec![i18n::namespace_current("English", "namespace1")]
    );
    assert_eq!(
        gw.dispatch(&show_u2).await,
        vec![i18n::namespace_current("English", NS)]
    );
}

#[tokio::test]
async fn test_run_replies_in_order_and_stops_at_end_of_input() {
    let server = mock_server().await;
    let input = "openwhisk namespace\n\nopenwhisk set namespace namespace1\nopenwhisk namespace\nhello\n";
    let (writer, mut output) = tokio::io::duplex(64 * 1024);
    let console = ConsoleChannel::with_io(
        console_config(),
        Box::new(BufReader::new(input.as_bytes())),
        Box::new(writer),
    );

    let mut channels: HashMap<String, Arc<dyn Channel>> = HashMap::new();
    channels.insert("console".to_string(), Arc::new(console));
    let gw = gateway(&server, channels);
    gw.run().await.unwrap();
    drop(gw);

    let mut text = String::new();
    output.read_to_string(&mut text).await.unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            i18n::namespace_current("English", NS),
            i18n::namespace_new("English", "namespace1"),
            i18n::namespace_current("English", "namespace1"),
            i18n::t("unknown_command", "English").to_string(),
        ]
    );
}

#[tokio::test]
async fn test_shutdown_ends_run_with_input_still_open() {
    let server = mock_server().await;
    let (mut input_writer, input_reader) = tokio::io::duplex(1024);
    let (writer, mut output) = tokio::io::duplex(64 * 1024);
    let console = ConsoleChannel::with_io(
        console_config(),
        Box::new(BufReader::new(input_reader)),
        Box::new(writer),
    );
    let mut channels: HashMap<String, Arc<dyn Channel>> = HashMap::new();
    channels.insert("console".to_string(), Arc::new(console));
    let gw = gateway(&server, channels);

    // Input is never closed; only the shutdown signal can end the loop.
    input_writer
        .write_all(b"openwhisk namespace\n")
        .await
        .unwrap();
    let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();
    let run = tokio::spawn(async move {
        gw.run_until(async {
            let _ = stop_rx.await;
        })
        .await
    });

    let mut first = vec![0u8; 256];
    let n = output.read(&mut first).await.unwrap();
    assert_eq!(
        String::from_utf8_lossy(&first[..n]).trim_end(),
        i18n::namespace_current("English", NS)
    );

    stop_tx.send(()).unwrap();
    let result = tokio::time::timeout(std::time::Duration::from_secs(5), run)
        .await
        .expect("run should return after shutdown");
    result.unwrap().unwrap();
    drop(input_writer);
}
