//! MCP (Model Context Protocol) route handlers
//!
//! This module implements the Model Context Protocol handlers for the grocery list service.
//! It exports `handle_tool_call` publicly to make it accessible for tests.

use super::{helpers::*, models::*};
use crate::delivery::deliver;
use crate::error::GroceryError;
use crate::list::{models::*, state::*};
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{debug, warn};

/// Creates routes for MCP-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", post(handle_mcp).get(handle_mcp_sse))
        .route("/mcp", post(handle_mcp).get(handle_mcp_sse)) // Standard endpoint
        .route("/mcp/", post(handle_mcp).get(handle_mcp_sse)) // Trailing slash safety
}

/// Handle SSE (Server-Sent Events) handshake for GET requests
async fn handle_mcp_sse() -> impl IntoResponse {
    (
        [("content-type", "text/event-stream")],
        "event: endpoint\ndata: /mcp\n\n",
    )
}

/// Endpoint: POST /mcp
/// Handles the Model Context Protocol communication for POST requests.
async fn handle_mcp(
    State(state): State<SharedState>,
    body: Result<Json<JsonRpcRequest>, axum::extract::rejection::JsonRejection>,
) -> impl IntoResponse {
    let req = match body {
        Ok(Json(r)) => r,
        Err(e) => {
            warn!(error = %e.body_text(), "rejected MCP request body");
            return (
                StatusCode::BAD_REQUEST,
                Json(rpc_error(Value::Null, -32700, "Parse error")),
            )
                .into_response();
        }
    };

    let id = req.id.unwrap_or(Value::Null);
    if let Some(version) = req.jsonrpc.as_deref().filter(|v| *v != JSONRPC_VERSION) {
        warn!(version, "unsupported JSON-RPC version");
        return Json(rpc_error(id, -32600, "Invalid Request")).into_response();
    }

    let method_name = req.method.as_str();
    let params = req.params.unwrap_or(Value::Null);

    debug!(method = method_name, id = %id, "MCP call");

    let response_body = match method_name {
        "initialize" => rpc_success(id, handle_initialize()),
        "notifications/initialized" => rpc_success(id, json!({})),
        "tools/list" => rpc_success(id, handle_tools_list()),
        "tools/call" => {
            let tool_name = params.get("name").and_then(|n| n.as_str()).unwrap_or("");
            let args = params.get("arguments").cloned().unwrap_or(Value::Null);

            match handle_tool_call(&state, tool_name, args).await {
                Ok(result) => rpc_success(id, result),
                Err(msg) => rpc_error(id, -32602, msg),
            }
        }
        "ping" => rpc_success(id, json!({})),
        _ => {
            warn!(method = method_name, "unknown MCP method");
            rpc_error(id, -32601, "Method not found")
        }
    };

    Json(response_body).into_response()
}

// =============================================================================
// MCP Method Handlers
// =============================================================================

/// Handles `initialize` request (Handshake).
fn handle_initialize() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": { "listChanged": false }
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION")
        }
    })
}

/// Handles `tools/list` request.
fn handle_tools_list() -> Value {
    json!({
        "tools": [
            {
                "name": ADD_ITEM_TOOL,
                "title": "Add item",
                "description": "Adds an item to the grocery list. Names are case-insensitive and must be unique.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "quantity": { "type": "string", "default": "1" }
                    },
                    "required": ["name"],
                    "additionalProperties": false
                }
            },
            {
                "name": REMOVE_ITEM_TOOL,
                "title": "Remove item",
                "description": "Removes an item from the grocery list.",
                "inputSchema": string_schema(&["name"])
            },
            {
                "name": UPDATE_QUANTITY_TOOL,
                "title": "Update quantity",
                "description": "Replaces the quantity of an item already on the list.",
                "inputSchema": string_schema(&["name", "quantity"])
            },
            {
                "name": RENAME_ITEM_TOOL,
                "title": "Rename item",
                "description": "Renames an item, keeping its place in the list.",
                "inputSchema": string_schema(&["name", "newName"])
            },
            {
                "name": LIST_ITEMS_TOOL,
                "title": "Show list",
                "description": "Returns the current grocery list in the order items were added.",
                "inputSchema": {
                    "type": "object",
                    "properties": {},
                    "additionalProperties": false
                }
            },
            {
                "name": SEND_LIST_TOOL,
                "title": "Text list",
                "description": "Texts the list to a phone through the carrier's email gateway, then starts a new list.",
                "inputSchema": string_schema(&["phone", "carrier"])
            }
        ]
    })
}

/// Handles `tools/call` request (Business Logic).
pub async fn handle_tool_call(state: &AppState, name: &str, args: Value) -> Result<Value, String> {
    let outcome = match name {
        ADD_ITEM_TOOL => handle_add_item_tool(state, parse_args(args)?).await,
        REMOVE_ITEM_TOOL => handle_remove_item_tool(state, parse_args(args)?).await,
        UPDATE_QUANTITY_TOOL => handle_update_quantity_tool(state, parse_args(args)?).await,
        RENAME_ITEM_TOOL => handle_rename_item_tool(state, parse_args(args)?).await,
        LIST_ITEMS_TOOL => Ok(handle_list_items_tool(state).await),
        SEND_LIST_TOOL => handle_send_list_tool(state, parse_args(args)?).await,
        _ => return Err(format!("Unknown tool: {}", name)),
    };

    outcome.map_err(|e| e.to_string())
}

fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T, String> {
    serde_json::from_value(args).map_err(|e| format!("Invalid arguments: {}", e))
}

async fn handle_add_item_tool(state: &AppState, input: AddItemInput) -> Result<Value, GroceryError> {
    let mut session = state.session.lock().await;
    let message = format!("Added {}.", session.catalog.add(&input.name, &input.quantity)?);
    Ok(tool_result(message, &session.snapshot()))
}

async fn handle_remove_item_tool(state: &AppState, input: ItemNameArgs) -> Result<Value, GroceryError> {
    let mut session = state.session.lock().await;
    let removed = session.catalog.remove(&input.name)?;
    let message = format!("Removed {}.", removed.name);
    Ok(tool_result(message, &session.snapshot()))
}

async fn handle_update_quantity_tool(
    state: &AppState,
    input: UpdateQuantityArgs,
) -> Result<Value, GroceryError> {
    let mut session = state.session.lock().await;
    let message = format!(
        "Updated {}.",
        session.catalog.update_quantity(&input.name, &input.quantity)?
    );
    Ok(tool_result(message, &session.snapshot()))
}

async fn handle_rename_item_tool(
    state: &AppState,
    input: RenameItemArgs,
) -> Result<Value, GroceryError> {
    let mut session = state.session.lock().await;
    let message = format!(
        "Renamed to {}.",
        session.catalog.rename(&input.name, &input.new_name)?
    );
    Ok(tool_result(message, &session.snapshot()))
}

async fn handle_list_items_tool(state: &AppState) -> Value {
    let session = state.session.lock().await;
    let message = if session.catalog.is_empty() {
        "The list is empty.".to_string()
    } else {
        session.catalog.to_display_lines().collect::<Vec<_>>().join("\n")
    };
    tool_result(message, &session.snapshot())
}

/// Sends the list and resets the session; on failure the list is kept.
async fn handle_send_list_tool(state: &AppState, input: FinalizeInput) -> Result<Value, GroceryError> {
    let mut session = state.session.lock().await;
    let receipt = deliver(
        session.catalog.items(),
        &input.phone,
        &input.carrier,
        &state.carriers,
        state.relay.as_ref(),
    )
    .await?;

    let sent_id = session.id;
    session.reset();

    let mut result = tool_result(
        format!("Sent list to {}.", receipt.destination),
        &session.snapshot(),
    );
    result["sent"] = json!({
        "listId": sent_id,
        "destination": receipt.destination,
        "message": receipt.message,
    });
    Ok(result)
}
