//! MCP Protocol Models and Constants
//!
//! This module contains all data structures and constants related to the
//! Model Context Protocol (MCP) specification.

use serde::Deserialize;
use serde_json::Value;

// =============================================================================
// MCP Constants
// =============================================================================

/// Tool: add an item to the list
pub const ADD_ITEM_TOOL: &str = "add_item";
/// Tool: remove an item from the list
pub const REMOVE_ITEM_TOOL: &str = "remove_item";
/// Tool: change an item's quantity
pub const UPDATE_QUANTITY_TOOL: &str = "update_quantity";
/// Tool: rename an item
pub const RENAME_ITEM_TOOL: &str = "rename_item";
/// Tool: show the current list
pub const LIST_ITEMS_TOOL: &str = "list_items";
/// Tool: text the list to a phone
pub const SEND_LIST_TOOL: &str = "send_list";
/// Server identifier
pub const SERVER_NAME: &str = "grocery-list-rust";
/// Protocol version for MCP
pub const PROTOCOL_VERSION: &str = "2024-11-05";
/// JSON-RPC version accepted in request envelopes
pub const JSONRPC_VERSION: &str = "2.0";

// =============================================================================
// MCP Protocol Models
// =============================================================================

/// Standard JSON-RPC 2.0 Request envelope
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version; anything other than "2.0" is rejected
    pub jsonrpc: Option<String>,

    /// Method name to invoke
    pub method: String,

    /// Parameters for the method
    pub params: Option<Value>,

    /// Request identifier
    pub id: Option<Value>,
}

// =============================================================================
// Tool Arguments
// =============================================================================

/// Arguments naming a single item
#[derive(Debug, Deserialize)]
pub struct ItemNameArgs {
    pub name: String,
}

/// Arguments for update_quantity
#[derive(Debug, Deserialize)]
pub struct UpdateQuantityArgs {
    pub name: String,
    pub quantity: String,
}

/// Arguments for rename_item
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameItemArgs {
    pub name: String,
    pub new_name: String,
}
