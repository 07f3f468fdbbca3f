//! HTTP client for the OpenWhisk control plane.
//!
//! Three calls, one error path: every response goes through [`WhiskClient::send`],
//! which maps transport failures, error payloads and malformed bodies onto
//! [`WhiskError`] and sanitizes backend messages.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{debug, warn};
use whisk_core::{
    config::WhiskConfig,
    error::WhiskError,
    model::{Action, ActivationResult},
    sanitize,
    traits::ActionService,
};

/// Client for `{endpoint}/api/v1/namespaces...`.
pub struct WhiskClient {
    client: reqwest::Client,
    base_url: String,
    credential: Option<String>,
}

impl WhiskClient {
    /// Create from config values. Does not touch the network.
    pub fn from_config(config: &WhiskConfig) -> Result<Self, WhiskError> {
        let mut builder = reqwest::Client::builder();
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }
        let client = builder
            .build()
            .map_err(|e| WhiskError::Config(format!("failed to build http client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url(),
            credential: config.credential().map(str::to_string),
        })
    }

    /// Effective base URL (after the `/api` → `/openwhisk` rewrite).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn credential(&self) -> Result<&str, WhiskError> {
        self.credential.as_deref().ok_or_else(|| {
            WhiskError::Config(
                "WHISK_TOKEN is not set; OpenWhisk operations cannot be performed".to_string(),
            )
        })
    }

    /// Build `{base}/api/v1/namespaces/{segments...}` with encoded segments.
    fn url(&self, segments: &[&str]) -> Result<Url, WhiskError> {
        if self.base_url.is_empty() {
            return Err(WhiskError::Config(
                "WHISK_ENDPOINT is not set; OpenWhisk operations cannot be performed".to_string(),
            ));
        }
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| WhiskError::Config(format!("invalid endpoint {}: {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|_| WhiskError::Config(format!("invalid endpoint {}", self.base_url)))?
            .pop_if_empty()
            .extend(["api", "v1", "namespaces"])
            .extend(segments);
        Ok(url)
    }

    /// Prepare an authenticated request. Fails before any I/O when the
    /// credential or endpoint is missing.
    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder, WhiskError> {
        let credential = self.credential()?;
        let url = self.url(segments)?;
        debug!("openwhisk: {method} {url}");
        Ok(self
            .client
            .request(method, url)
            .header(AUTHORIZATION, format!("Basic {credential}"))
            .header(ACCEPT, "application/json"))
    }

    /// Send a request and return the parsed JSON body, `None` for an empty
    /// successful body.
    async fn send(&self, request: RequestBuilder, what: &str) -> Result<Option<Value>, WhiskError> {
        let resp = request.send().await.map_err(|e| {
            warn!("openwhisk: {what} request failed: {e}");
            WhiskError::Transport(format!("{what} request failed: {e}"))
        })?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| WhiskError::Transport(format!("{what}: failed to read body: {e}")))?;
        let body = text.trim();

        if body.is_empty() {
            if status.is_success() {
                return Ok(None);
            }
            warn!("openwhisk: {what} returned {status} with empty body");
            return Err(WhiskError::remote(sanitize::error_message(Some(
                &status.to_string(),
            ))));
        }

        let value = match serde_json::from_str::<Value>(body) {
            Ok(v) => v,
            Err(e) if status.is_success() => {
                return Err(WhiskError::Protocol(format!(
                    "{what}: response is not JSON: {e}"
                )));
            }
            Err(_) => {
                warn!("openwhisk: {what} returned {status}");
                return Err(WhiskError::remote(sanitize::error_message(Some(body))));
            }
        };

        if let Some(err) = value.get("error").filter(|e| sanitize::is_truthy(e)) {
            let message = sanitize::error_value(err);
            warn!("openwhisk: {what} returned error payload ({status})");
            return Err(WhiskError::Remote {
                message,
                payload: Some(value),
            });
        }

        if !status.is_success() {
            warn!("openwhisk: {what} returned {status}");
            return Err(WhiskError::Remote {
                message: sanitize::error_message(Some(&format!("{what} returned {status}"))),
                payload: Some(value),
            });
        }

        Ok(Some(value))
    }
}

/// Deserialize a required list body.
fn parse_list<T: DeserializeOwned>(body: Option<Value>, what: &str) -> Result<Vec<T>, WhiskError> {
    let value = body.ok_or_else(|| WhiskError::Protocol(format!("{what}: empty response")))?;
    serde_json::from_value(value)
        .map_err(|e| WhiskError::Protocol(format!("{what}: unexpected response shape: {e}")))
}

#[async_trait]
impl ActionService for WhiskClient {
    async fn list_namespaces(&self) -> Result<Vec<String>, WhiskError> {
        let req = self.request(Method::GET, &[])?;
        let body = self.send(req, "list namespaces").await?;
        parse_list(body, "list namespaces")
    }

    async fn list_actions(&self, namespace: &str) -> Result<Vec<Action>, WhiskError> {
        let req = self.request(Method::GET, &[namespace, "actions"])?;
        let body = self.send(req, "list actions").await?;
        parse_list(body, "list actions")
    }

    async fn invoke(
        &self,
        action: &str,
        namespace: &str,
        body: &Map<String, Value>,
    ) -> Result<ActivationResult, WhiskError> {
        let mut req = self.request(Method::POST, &[namespace, "actions", action])?;
        if !body.is_empty() {
            req = req.json(body);
        }
        match self.send(req, "invoke").await? {
            None => Ok(ActivationResult::default()),
            Some(value @ Value::Object(_)) => serde_json::from_value(value)
                .map_err(|e| WhiskError::Protocol(format!("invoke: unexpected response shape: {e}"))),
            Some(_) => Err(WhiskError::Protocol(
                "invoke: response is not a JSON object".to_string(),
            )),
        }
    }
}
