//! Reusable test helpers for HTTP integration tests.
//!
//! Provides `TestApp` for building and sending requests through the full axum
//! router, signed with the test keypair whose public key is in
//! [`Config::default_for_test`].
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{self, Method, Request, Response};
use axum::Router;
use ed25519_dalek::{Signer, SigningKey};
use http_body_util::BodyExt;
use tower::ServiceExt;
use tumbler_server::api::{create_router, AppState};
use tumbler_server::commands::CommandRouter;
use tumbler_server::config::Config;

/// Timestamp used for signed requests.
pub const TEST_TIMESTAMP: &str = "1700000000";

/// Seed of the keypair matching `Config::default_for_test().public_key`.
const TEST_KEY_SEED: [u8; 32] = [7; 32];

/// Test application wrapping the full router.
pub struct TestApp {
    pub router: Router,
    pub config: Arc<Config>,
    signing_key: SigningKey,
}

impl TestApp {
    /// Create a test app with the default test config and built-in commands.
    pub fn new() -> Self {
        Self::with_config(Config::default_for_test())
    }

    /// Create a test app with a custom config.
    pub fn with_config(config: Config) -> Self {
        Self::with_commands(config, CommandRouter::standard().expect("standard registry"))
    }

    /// Create a test app with a custom config and command router.
    pub fn with_commands(config: Config, commands: CommandRouter) -> Self {
        let state = AppState::new(config.clone(), commands).expect("Failed to build AppState");
        Self {
            router: create_router(state),
            config: Arc::new(config),
            signing_key: SigningKey::from_bytes(&TEST_KEY_SEED),
        }
    }

    /// Build an HTTP request with the given method and URI.
    pub fn request(method: Method, uri: &str) -> http::request::Builder {
        Request::builder().method(method).uri(uri)
    }

    /// Hex signature over `timestamp ‖ body` with the test key.
    pub fn sign(&self, timestamp: &str, body: &[u8]) -> String {
        let mut message = timestamp.as_bytes().to_vec();
        message.extend_from_slice(body);
        hex::encode(self.signing_key.sign(&message).to_bytes())
    }

    /// A correctly signed POST of raw bytes to `/`.
    pub fn signed_post_bytes(&self, body: Vec<u8>) -> Request<Body> {
        let signature = self.sign(TEST_TIMESTAMP, &body);
        Self::request(Method::POST, "/")
            .header("content-type", "application/json")
            .header("x-signature-ed25519", signature)
            .header("x-signature-timestamp", TEST_TIMESTAMP)
            .body(Body::from(body))
            .expect("Failed to build request")
    }

    /// A correctly signed POST of a JSON event to `/`.
    pub fn signed_post(&self, event: &serde_json::Value) -> Request<Body> {
        self.signed_post_bytes(serde_json::to_vec(event).expect("serialize event"))
    }

    /// Send a request through the router via `tower::ServiceExt::oneshot`.
    pub async fn oneshot(&self, request: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("oneshot request failed")
    }
}

/// Handshake event.
pub fn ping_event() -> serde_json::Value {
    serde_json::json!({
        "id": "1000",
        "application_id": "123456789012345678",
        "type": 1,
    })
}

/// Command event with the given name and options.
pub fn command_event(name: &str, options: Option<serde_json::Value>) -> serde_json::Value {
    let mut data = serde_json::json!({
        "id": "2000",
        "type": 1,
        "name": name,
    });
    if let Some(options) = options {
        data["options"] = options;
    }
    serde_json::json!({
        "id": "1001",
        "application_id": "123456789012345678",
        "type": 2,
        "guild_id": "3000",
        "channel_id": "4000",
        "data": data,
    })
}

/// Collect a response body into a string.
pub async fn body_to_string(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to collect response body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("Response body is not UTF-8")
}

/// Collect a response body and parse it as JSON.
pub async fn body_to_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to collect response body")
        .to_bytes();
    serde_json::from_slice(&bytes).unwrap_or_else(|e| {
        let preview = String::from_utf8_lossy(&bytes);
        panic!("Failed to parse response as JSON: {e}\nBody: {preview}")
    })
}

/// Content-Type header of a response, or an empty string.
pub fn content_type(response: &Response<Body>) -> String {
    response
        .headers()
        .get(http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
