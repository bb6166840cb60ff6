//! Shared helpers for driving the router in integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use grocery_list_rust::delivery::{CarrierTable, MailRelay};
use grocery_list_rust::error::DeliveryError;
use grocery_list_rust::list::AppState;
use grocery_list_rust::router::create_app_router;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tower::util::ServiceExt; // for `oneshot`

/// Relay that records every send instead of talking to a server
#[derive(Default)]
pub struct RecordingRelay {
    pub sent: Mutex<Vec<(String, String)>>,
    pub fail: bool,
}

impl RecordingRelay {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailRelay for RecordingRelay {
    async fn send(&self, body: &str, destination: &str) -> Result<(), DeliveryError> {
        self.sent
            .lock()
            .unwrap()
            .push((body.to_string(), destination.to_string()));
        if self.fail {
            let err = "relay refused".parse::<lettre::Address>().unwrap_err();
            return Err(DeliveryError::Address(err));
        }
        Ok(())
    }
}

/// Helper function to create a test app instance around the given relay
pub fn create_test_app(relay: Arc<RecordingRelay>) -> axum::Router {
    let state = Arc::new(AppState::new(CarrierTable::default(), relay));
    create_app_router(state)
}

/// Helper function to send a JSON request and get the response (REST API)
pub async fn send_rest_request(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let body = match body {
        Some(v) => Body::from(serde_json::to_string(&v).unwrap()),
        None => Body::empty(),
    };
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(json!({}));

    (status, body)
}

/// Helper function to send a JSON-RPC request and get the response
pub async fn send_jsonrpc_request(
    app: &axum::Router,
    method: &str,
    params: Option<Value>,
    id: i32,
) -> (StatusCode, Value) {
    let request_body = json!({
        "jsonrpc": "2.0",
        "method": method,
        "params": params,
        "id": id
    });

    send_rest_request(app, "POST", "/mcp", Some(request_body)).await
}

/// Calls an MCP tool and returns the JSON-RPC response body
pub async fn call_tool(app: &axum::Router, name: &str, arguments: Value, id: i32) -> Value {
    let params = json!({ "name": name, "arguments": arguments });
    let (status, body) = send_jsonrpc_request(app, "tools/call", Some(params), id).await;
    assert_eq!(status, StatusCode::OK);
    body
}
