//! Grocery List State Management
//!
//! This module holds the single list session owned by the running service,
//! along with the carrier table and mail relay used to send it.

use super::{catalog::Catalog, models::ListSnapshot};
use crate::delivery::{CarrierTable, MailRelay};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

// =============================================================================
// List Session
// =============================================================================

/// One list-building session: a catalog and the id clients see for it
#[derive(Debug)]
pub struct ListSession {
    pub id: Uuid,
    pub catalog: Catalog,
}

impl Default for ListSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ListSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            catalog: Catalog::new(),
        }
    }

    /// Discards the current list and starts an empty one with a new id.
    pub fn reset(&mut self) -> Uuid {
        let previous = self.id;
        *self = Self::new();
        info!(previous = %previous, list_id = %self.id, "started a new list");
        self.id
    }

    pub fn snapshot(&self) -> ListSnapshot {
        ListSnapshot {
            list_id: self.id,
            items: self.catalog.items().to_vec(),
            lines: self.catalog.to_display_lines().collect(),
        }
    }
}

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state: the list session plus delivery collaborators
pub struct AppState {
    /// The async mutex is held across the relay call during finalize, so
    /// the list cannot change while it is being sent.
    pub session: Mutex<ListSession>,

    pub carriers: CarrierTable,

    pub relay: Arc<dyn MailRelay>,
}

impl AppState {
    pub fn new(carriers: CarrierTable, relay: Arc<dyn MailRelay>) -> Self {
        Self {
            session: Mutex::new(ListSession::new()),
            carriers,
            relay,
        }
    }
}
