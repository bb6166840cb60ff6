//! Delivery Module
//!
//! Turns a finished list into a text message and sends it once:
//! - Carrier table and gateway address resolution
//! - Message body formatting
//! - The outbound mail relay

pub mod carriers;
pub mod message;
pub mod relay;

pub use carriers::{resolve_address, CarrierTable, CARRIERS};
pub use message::format_message;
pub use relay::{MailRelay, SmtpRelay};

use crate::{error::GroceryError, list::models::Item};

/// What was sent by a successful [`deliver`] call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub destination: String,
    pub message: String,
}

/// Runs format, resolve and send in that order. There is no retry; a relay
/// failure is returned as [`GroceryError::Delivery`].
pub async fn deliver(
    items: &[Item],
    phone: &str,
    carrier: &str,
    carriers: &CarrierTable,
    relay: &dyn MailRelay,
) -> Result<Receipt, GroceryError> {
    if phone.trim().is_empty() {
        return Err(GroceryError::MissingField("phone"));
    }
    if carrier.trim().is_empty() {
        return Err(GroceryError::MissingField("carrier"));
    }

    let message = format_message(items);
    let destination = resolve_address(phone, carrier, carriers)?;
    relay.send(&message, &destination).await?;

    Ok(Receipt {
        destination,
        message,
    })
}
