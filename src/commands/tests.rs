use super::*;
use async_trait::async_trait;
use serde_json::json;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use whisk_client::WhiskClient;
use whisk_core::config::{MemoryConfig, WhiskConfig};
use whisk_core::{error::WhiskError, model::NamespacePreference, traits::PreferenceStore};
use whisk_memory::{ActivityLogger, MemoryPreferences, Store};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const NS: &str = "testOrg_testSpace";

static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Create a temporary on-disk store for testing (unique per call).
async fn test_store() -> Store {
    let id = TEST_COUNTER.fetch_add(1, Ordering::Relaxed);
    let dir =
        std::env::temp_dir().join(format!("__whisk_cmd_test_{}_{}__", std::process::id(), id));
    let _ = std::fs::create_dir_all(&dir);
    let db_path = dir.join("test.db").to_string_lossy().to_string();
    let _ = std::fs::remove_file(&db_path);
    Store::new(&MemoryConfig { db_path }).await.unwrap()
}

/// Mock platform with three namespaces, two actions, `action1` accepting
/// invocations and `actionUnknown` answering with an empty object.
async fn mock_platform() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/namespaces"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([NS, "namespace1", "namespace2"])),
        )
        .mount(&server)
        .await;
    for ns in [NS, "namespace1"] {
        Mock::given(method("GET"))
            .and(path(format!("/api/v1/namespaces/{ns}/actions")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"name": "action1", "version": "0.0.1", "publish": false, "namespace": ns},
                {"name": "action2", "version": "0.0.2", "publish": true, "namespace": ns}
            ])))
            .mount(&server)
            .await;
    }
    Mock::given(method("POST"))
        .and(path(format!("/api/v1/namespaces/{NS}/actions/action1")))
        .respond_with(
            ResponseTemplate::new(202).set_body_json(json!({"activationId": "abc123"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!("/api/v1/namespaces/{NS}/actions/actionUnknown")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;
    server
}

/// Preference store whose writes always fail.
struct ReadOnlyStore;

#[async_trait]
impl PreferenceStore for ReadOnlyStore {
    async fn get(&self, _user_id: &str) -> Result<Option<NamespacePreference>, WhiskError> {
        Ok(None)
    }

    async fn set(&self, _preference: NamespacePreference) -> Result<(), WhiskError> {
        Err(WhiskError::Memory("database is locked".to_string()))
    }
}

struct Harness {
    _server: MockServer,
    client: Arc<WhiskClient>,
    resolver: NamespaceResolver,
    activity: Option<ActivityLogger>,
}

impl Harness {
    async fn new() -> Self {
        Self::with_credential("tok").await
    }

    async fn with_credential(credential: &str) -> Self {
        Self::build(credential, Arc::new(MemoryPreferences::new())).await
    }

    async fn build(credential: &str, store: Arc<dyn PreferenceStore>) -> Self {
        let server = mock_platform().await;
        let config = WhiskConfig {
            endpoint: server.uri(),
            organization: "testOrg".to_string(),
            space: "testSpace".to_string(),
            credential: credential.to_string(),
            timeout_secs: 5,
        };
        let client = Arc::new(WhiskClient::from_config(&config).unwrap());
        let resolver = NamespaceResolver::new(config.default_namespace(), store, client.clone());
        Self {
            _server: server,
            client,
            resolver,
            activity: None,
        }
    }

    fn ctx<'a>(&'a self, sender_id: &'a str) -> CommandContext<'a> {
        CommandContext {
            resolver: &self.resolver,
            service: self.client.as_ref(),
            activity: self.activity.as_ref(),
            channel: "console",
            sender_id,
            sender_name: Some("Test User"),
            bot_name: "whisk",
            lang: "English",
        }
    }

    async fn run(&self, sender_id: &str, text: &str) -> Vec<String> {
        let cmd = Command::parse(text).expect("command should parse");
        handle(cmd, &self.ctx(sender_id)).await
    }
}

// --- parsing ---

#[test]
fn test_parse_slash_commands() {
    assert_eq!(Command::parse("/help"), Some(Command::Help));
    assert_eq!(Command::parse("/namespaces"), Some(Command::ListNamespaces));
    assert_eq!(Command::parse("/actions"), Some(Command::ListActions));
    assert_eq!(Command::parse("/namespace"), Some(Command::ShowNamespace));
    assert_eq!(
        Command::parse("/namespace namespace1"),
        Some(Command::SetNamespace(Some("namespace1".into())))
    );
    assert_eq!(
        Command::parse("/invoke action1"),
        Some(Command::Invoke(Some("action1".into())))
    );
    assert_eq!(Command::parse("/invoke"), Some(Command::Invoke(None)));
}

#[test]
fn test_parse_slash_strips_botname() {
    assert_eq!(Command::parse("/help@whisk_bot"), Some(Command::Help));
    assert_eq!(
        Command::parse("/invoke@whisk_bot action1"),
        Some(Command::Invoke(Some("action1".into())))
    );
}

#[test]
fn test_parse_phrases() {
    assert_eq!(Command::parse("openwhisk help"), Some(Command::Help));
    assert_eq!(
        Command::parse("@whisk openwhisk list namespaces"),
        Some(Command::ListNamespaces)
    );
    assert_eq!(
        Command::parse("whisk openwhisk show namespaces"),
        Some(Command::ListNamespaces)
    );
    assert_eq!(
        Command::parse("openwhisk show actions"),
        Some(Command::ListActions)
    );
    assert_eq!(
        Command::parse("openwhisk list actions"),
        Some(Command::ListActions)
    );
    assert_eq!(
        Command::parse("openwhisk namespace"),
        Some(Command::ShowNamespace)
    );
    assert_eq!(
        Command::parse("openwhisk use namespace namespace2"),
        Some(Command::SetNamespace(Some("namespace2".into())))
    );
    assert_eq!(
        Command::parse("openwhisk set namespace"),
        Some(Command::SetNamespace(None))
    );
}

#[test]
fn test_parse_keywords_case_insensitive_args_verbatim() {
    assert_eq!(
        Command::parse("OpenWhisk Invoke Action MyAction"),
        Some(Command::Invoke(Some("MyAction".into())))
    );
    assert_eq!(
        Command::parse("OPENWHISK SET NAMESPACE testOrg_testSpace"),
        Some(Command::SetNamespace(Some(NS.into())))
    );
}

#[test]
fn test_parse_unknown() {
    assert_eq!(Command::parse(""), None);
    assert_eq!(Command::parse("hello there"), None);
    assert_eq!(Command::parse("/unknown"), None);
    assert_eq!(Command::parse("openwhisk"), None);
    assert_eq!(Command::parse("openwhisk delete action a"), None);
}

// --- handling ---

#[tokio::test]
async fn test_help_reply() {
    let h = Harness::new().await;
    let replies = h.run("u1", "openwhisk help").await;
    assert_eq!(replies.len(), 1);
    assert!(replies[0].starts_with(i18n::t("help_header", "English")));
    assert!(replies[0].contains("whisk openwhisk invoke action [action]"));
}

#[tokio::test]
async fn test_list_namespaces_reply() {
    let h = Harness::new().await;
    let replies = h.run("u1", "openwhisk list namespaces").await;
    assert_eq!(replies.len(), 2);
    assert_eq!(replies[0], i18n::t("namespaces_in_progress", "English"));
    assert_eq!(
        replies[1],
        format!(
            "{}\n{NS}\nnamespace1\nnamespace2",
            i18n::t("namespaces_header", "English")
        )
    );
}

#[tokio::test]
async fn test_list_namespaces_failure_reply() {
    let h = Harness::with_credential("").await;
    let replies = h.run("u1", "/namespaces").await;
    assert_eq!(replies.len(), 2);
    assert_eq!(replies[1], i18n::t("namespaces_failure", "English"));
}

#[tokio::test]
async fn test_show_namespace_defaults_to_org_space() {
    let h = Harness::new().await;
    let replies = h.run("u1", "openwhisk namespace").await;
    assert_eq!(replies, vec![i18n::namespace_current("English", NS)]);
}

#[tokio::test]
async fn test_set_namespace_then_show() {
    let h = Harness::new().await;
    let replies = h.run("u1", "openwhisk set namespace namespace1").await;
    assert_eq!(replies, vec![i18n::namespace_new("English", "namespace1")]);

    let replies = h.run("u1", "openwhisk namespace").await;
    assert_eq!(replies, vec![i18n::namespace_current("English", "namespace1")]);

    // Other users are unaffected.
    let replies = h.run("u2", "openwhisk namespace").await;
    assert_eq!(replies, vec![i18n::namespace_current("English", NS)]);
}

#[tokio::test]
async fn test_set_unknown_namespace_keeps_previous() {
    let h = Harness::new().await;
    let replies = h.run("u1", "openwhisk set namespace unknownSpace").await;
    assert_eq!(
        replies,
        vec![i18n::namespace_not_found("English", "unknownSpace")]
    );
    assert_eq!(h.resolver.active_namespace(Some("u1")).await, NS);
}

#[tokio::test]
async fn test_set_namespace_without_argument() {
    let h = Harness::new().await;
    let replies = h.run("u1", "openwhisk set namespace").await;
    assert_eq!(replies, vec![i18n::t("set_namespace_usage", "English")]);
}

#[tokio::test]
async fn test_set_namespace_listing_failure() {
    let h = Harness::with_credential("").await;
    let replies = h.run("u1", "/namespace namespace1").await;
    assert_eq!(replies, vec![i18n::t("namespace_none", "English")]);
}

#[tokio::test]
async fn test_set_namespace_store_failure() {
    let h = Harness::build("tok", Arc::new(ReadOnlyStore)).await;
    let replies = h.run("u1", "openwhisk set namespace namespace1").await;
    assert_eq!(replies, vec![i18n::t("namespace_save_failed", "English")]);
    assert_ne!(
        replies[0],
        i18n::t("namespace_none", "English"),
        "store failure must not claim the listing failed"
    );
    assert_eq!(h.resolver.active_namespace(Some("u1")).await, NS);
}

#[tokio::test]
async fn test_list_actions_in_active_namespace() {
    let h = Harness::new().await;
    h.run("u1", "/namespace namespace1").await;

    let replies = h.run("u1", "openwhisk show actions").await;
    assert_eq!(replies.len(), 2);
    assert_eq!(replies[0], i18n::show_in_progress("English", "namespace1"));
    assert!(replies[1].contains("- action1 (version 0.0.1, not published)"));
    assert!(replies[1].contains("- action2 (version 0.0.2, published)"));
}

#[tokio::test]
async fn test_list_actions_failure() {
    let h = Harness::new().await;
    // namespace2 has no actions mock; the server answers 404.
    h.run("u1", "/namespace namespace2").await;
    let replies = h.run("u1", "/actions").await;
    assert_eq!(replies[1], i18n::show_failure("English", "namespace2"));
}

#[tokio::test]
async fn test_invoke_accepted() {
    let h = Harness::new().await;
    let replies = h.run("u1", "openwhisk invoke action action1").await;
    assert_eq!(
        replies,
        vec![
            i18n::invoke_in_progress("English", "action1"),
            i18n::invoke_success("English", "action1"),
        ]
    );
}

#[tokio::test]
async fn test_invoke_without_activation_id_fails() {
    let h = Harness::new().await;
    let replies = h.run("u1", "openwhisk invoke action actionUnknown").await;
    assert_eq!(replies[1], i18n::invoke_failure("English", "actionUnknown"));
}

#[tokio::test]
async fn test_invoke_without_argument() {
    let h = Harness::new().await;
    let replies = h.run("u1", "/invoke").await;
    assert_eq!(replies, vec![i18n::t("invoke_usage", "English")]);
}

#[tokio::test]
async fn test_replies_follow_language() {
    let h = Harness::new().await;
    let mut ctx = h.ctx("u1");
    ctx.lang = "Spanish";
    let replies = handle(Command::ShowNamespace, &ctx).await;
    assert_eq!(replies, vec![i18n::namespace_current("Spanish", NS)]);
}

#[tokio::test]
async fn test_activity_is_recorded() {
    let mut h = Harness::new().await;
    let store = test_store().await;
    let logger = ActivityLogger::new(store.pool().clone());
    h.activity = Some(logger.clone());

    h.run("u1", "/namespaces").await;
    h.run("u1", "/invoke action1").await;
    h.run("u1", "/invoke actionUnknown").await;
    // Show and help are not recorded.
    h.run("u1", "/namespace").await;
    h.run("u1", "/help").await;

    let recent = logger.recent("u1", 10).await.unwrap();
    assert_eq!(
        recent,
        vec![
            whisk_memory::activity::INVOKE_ACTION,
            whisk_memory::activity::INVOKE_ACTION,
            whisk_memory::activity::LIST_NAMESPACES,
        ]
    );
}
