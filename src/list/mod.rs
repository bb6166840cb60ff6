//! Grocery List Domain Module
//!
//! This module contains the grocery list business logic, including:
//! - Domain models (Item, inputs, responses)
//! - The name-keyed item catalog
//! - Application state management
//! - REST API handlers

pub mod catalog;
pub mod handlers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use catalog::{normalize_name, Catalog};
pub use handlers::routes;
pub use state::{AppState, ListSession, SharedState};
