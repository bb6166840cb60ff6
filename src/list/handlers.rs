//! REST API handlers for grocery list operations
//!
//! This module implements HTTP endpoints for editing the list, listing
//! carriers and finalizing (texting) the list.

use super::{models::*, state::SharedState};
use crate::{delivery::deliver, error::GroceryError};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::json;
use tracing::info;

/// Creates routes for list-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/list", get(show_list).delete(abandon_list))
        .route("/items", post(add_item))
        .route("/items/:name", delete(remove_item))
        .route("/items/:name/quantity", put(update_quantity))
        .route("/items/:name/name", put(rename_item))
        .route("/carriers", get(list_carriers))
        .route("/finalize", post(finalize))
}

/// Endpoint: GET /list
async fn show_list(State(state): State<SharedState>) -> Json<ListSnapshot> {
    Json(state.session.lock().await.snapshot())
}

/// Endpoint: DELETE /list
/// Abandons the current list and starts an empty one.
async fn abandon_list(State(state): State<SharedState>) -> Json<ListSnapshot> {
    let mut session = state.session.lock().await;
    session.reset();
    Json(session.snapshot())
}

/// Endpoint: POST /items
async fn add_item(
    State(state): State<SharedState>,
    Json(payload): Json<AddItemInput>,
) -> Result<impl IntoResponse, GroceryError> {
    let mut session = state.session.lock().await;
    session.catalog.add(&payload.name, &payload.quantity)?;
    Ok((StatusCode::CREATED, Json(session.snapshot())))
}

/// Endpoint: DELETE /items/:name
async fn remove_item(
    State(state): State<SharedState>,
    Path(name): Path<String>,
) -> Result<Json<ListSnapshot>, GroceryError> {
    let mut session = state.session.lock().await;
    session.catalog.remove(&name)?;
    Ok(Json(session.snapshot()))
}

/// Endpoint: PUT /items/:name/quantity
async fn update_quantity(
    State(state): State<SharedState>,
    Path(name): Path<String>,
    Json(payload): Json<UpdateQuantityInput>,
) -> Result<Json<ListSnapshot>, GroceryError> {
    let mut session = state.session.lock().await;
    session.catalog.update_quantity(&name, &payload.quantity)?;
    Ok(Json(session.snapshot()))
}

/// Endpoint: PUT /items/:name/name
async fn rename_item(
    State(state): State<SharedState>,
    Path(name): Path<String>,
    Json(payload): Json<RenameInput>,
) -> Result<Json<ListSnapshot>, GroceryError> {
    let mut session = state.session.lock().await;
    session.catalog.rename(&name, &payload.new_name)?;
    Ok(Json(session.snapshot()))
}

/// Endpoint: GET /carriers
async fn list_carriers(State(state): State<SharedState>) -> impl IntoResponse {
    let carriers: Vec<&str> = state.carriers.names().collect();
    Json(json!({ "carriers": carriers }))
}

/// Endpoint: POST /finalize
/// Texts the list to the given phone, then starts a fresh list. A failed
/// send leaves the list in place.
async fn finalize(
    State(state): State<SharedState>,
    Json(payload): Json<FinalizeInput>,
) -> Result<Json<FinalizeResponse>, GroceryError> {
    let mut session = state.session.lock().await;
    let receipt = deliver(
        session.catalog.items(),
        &payload.phone,
        &payload.carrier,
        &state.carriers,
        state.relay.as_ref(),
    )
    .await?;

    let list_id = session.id;
    info!(list_id = %list_id, items = session.catalog.len(), "list finalized");
    let next_list_id = session.reset();

    Ok(Json(FinalizeResponse {
        status: "sent".to_string(),
        list_id,
        next_list_id,
        destination: receipt.destination,
        message: receipt.message,
    }))
}
