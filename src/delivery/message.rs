//! Message body formatting

use crate::list::models::Item;

/// Subject header of the outgoing mail.
pub const SUBJECT: &str = "Grocery List!";

/// First line of every message body.
pub const HEADER: &str = "Items:";

/// Renders the header followed by one `"<name> <quantity>"` line per item.
pub fn format_message(items: &[Item]) -> String {
    std::iter::once(HEADER.to_string())
        .chain(
            items
                .iter()
                .map(|item| format!("{} {}", item.name, item.quantity)),
        )
        .collect::<Vec<_>>()
        .join("\n")
}
