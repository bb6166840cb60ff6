//! Error types shared by the grocery list and delivery modules.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failure of the single outbound delivery attempt.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The sender or destination could not be parsed as a mailbox.
    #[error("invalid address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The message could not be assembled.
    #[error("could not build message: {0}")]
    Message(#[from] lettre::error::Error),

    /// Connection, TLS, authentication or transmission failure.
    #[error("relay failure: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Errors surfaced by list operations and the delivery pipeline.
#[derive(Debug, Error)]
pub enum GroceryError {
    #[error("'{0}' is already on the list")]
    DuplicateItem(String),

    #[error("'{0}' is not on the list")]
    NotFound(String),

    #[error("unknown carrier '{0}'")]
    UnknownCarrier(String),

    #[error("{0} must not be empty")]
    MissingField(&'static str),

    #[error("delivery failed: {0}")]
    Delivery(#[from] DeliveryError),
}

impl GroceryError {
    /// HTTP status reported by the REST API for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            GroceryError::DuplicateItem(_) => StatusCode::CONFLICT,
            GroceryError::NotFound(_) => StatusCode::NOT_FOUND,
            GroceryError::UnknownCarrier(_) | GroceryError::MissingField(_) => {
                StatusCode::BAD_REQUEST
            }
            GroceryError::Delivery(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for GroceryError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}
