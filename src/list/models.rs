//! Grocery List Domain Models
//!
//! This module contains all data structures related to the grocery list
//! business domain.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// =============================================================================
// List Domain Models
// =============================================================================

/// Returns the default quantity ("1") for list items
fn default_quantity() -> String {
    "1".to_string()
}

/// Represents one entry on the grocery list
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Item {
    /// Lower-cased item name, unique within a catalog
    pub name: String,

    /// Free-text quantity ("2", "a dozen", "1 lb")
    pub quantity: String,
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.quantity)
    }
}

/// Input for adding an item
#[derive(Debug, Deserialize)]
pub struct AddItemInput {
    pub name: String,

    #[serde(default = "default_quantity")]
    pub quantity: String,
}

/// Input for replacing an item's quantity
#[derive(Debug, Deserialize)]
pub struct UpdateQuantityInput {
    pub quantity: String,
}

/// Input for renaming an item
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameInput {
    pub new_name: String,
}

/// Input for finalizing the list and texting it
#[derive(Debug, Deserialize)]
pub struct FinalizeInput {
    /// Destination phone number, used verbatim
    #[serde(default)]
    pub phone: String,

    /// Carrier display name, e.g. "Verizon"
    #[serde(default)]
    pub carrier: String,
}

/// Full view of the current list returned by every list operation
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSnapshot {
    pub list_id: Uuid,
    pub items: Vec<Item>,

    /// `"<name>: <quantity>"` per item, in insertion order
    pub lines: Vec<String>,
}

/// Response for a successful finalize
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalizeResponse {
    pub status: String,

    /// Identifier of the list that was sent
    pub list_id: Uuid,

    /// Identifier of the fresh list that replaced it
    pub next_list_id: Uuid,

    pub destination: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_displays_as_name_colon_quantity() {
        let item = Item {
            name: "milk".into(),
            quantity: "2".into(),
        };
        assert_eq!(item.to_string(), "milk: 2");
    }

    #[test]
    fn add_input_defaults_quantity_to_one() {
        let input: AddItemInput = serde_json::from_str(r#"{"name":"Bread"}"#).unwrap();
        assert_eq!(input.quantity, "1");
    }

    #[test]
    fn rename_input_uses_camel_case() {
        let input: RenameInput = serde_json::from_str(r#"{"newName":"rye"}"#).unwrap();
        assert_eq!(input.new_name, "rye");
    }
}
