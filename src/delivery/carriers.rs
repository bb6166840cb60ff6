//! Carrier name to SMS-gateway domain lookup

use crate::error::GroceryError;

/// Bundled carriers, in the order they are offered to the user.
pub const CARRIERS: &[(&str, &str)] = &[
    ("Verizon", "vtext.com"),
    ("T-Mobile", "tmomail.net"),
    ("Sprint", "messaging.sprintpcs.com"),
    ("AT&T", "txt.att.net"),
    ("Boost Mobile", "smsmyboostmobile.com"),
    ("Cricket", "sms.cricketwireless.net"),
    ("U.S. Cellular", "email.uscc.net"),
];

/// Read-only mapping from carrier display name to gateway domain.
#[derive(Debug, Clone, Copy)]
pub struct CarrierTable {
    entries: &'static [(&'static str, &'static str)],
}

impl Default for CarrierTable {
    fn default() -> Self {
        Self::new(CARRIERS)
    }
}

impl CarrierTable {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Carrier display names in table order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    /// Gateway domain for an exact carrier display name.
    pub fn domain(&self, carrier_name: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == carrier_name)
            .map(|(_, domain)| *domain)
    }
}

/// Builds `<phone>@<gateway domain>` for the given carrier.
///
/// The phone number is used exactly as given.
pub fn resolve_address(
    phone: &str,
    carrier_name: &str,
    carriers: &CarrierTable,
) -> Result<String, GroceryError> {
    let domain = carriers
        .domain(carrier_name)
        .ok_or_else(|| GroceryError::UnknownCarrier(carrier_name.to_string()))?;
    Ok(format!("{}@{}", phone, domain))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_verizon_number() {
        let table = CarrierTable::default();
        assert_eq!(
            resolve_address("5551234567", "Verizon", &table).unwrap(),
            "5551234567@vtext.com"
        );
    }

    #[test]
    fn unknown_carrier_is_rejected() {
        let table = CarrierTable::default();
        assert!(matches!(
            resolve_address("5551234567", "Nonexistent", &table),
            Err(GroceryError::UnknownCarrier(ref c)) if c == "Nonexistent"
        ));
    }

    #[test]
    fn phone_is_not_validated() {
        let table = CarrierTable::default();
        assert_eq!(
            resolve_address("555-CALL-NOW", "AT&T", &table).unwrap(),
            "555-CALL-NOW@txt.att.net"
        );
    }

    #[test]
    fn phone_is_concatenated_verbatim() {
        let table = CarrierTable::default();
        assert_eq!(
            resolve_address(" 5551234567", "Verizon", &table).unwrap(),
            " 5551234567@vtext.com"
        );
    }

    #[test]
    fn names_keep_table_order() {
        let names: Vec<_> = CarrierTable::default().names().collect();
        assert_eq!(names.first(), Some(&"Verizon"));
        assert_eq!(names.len(), CARRIERS.len());
    }

    #[test]
    fn custom_table_is_honoured() {
        static ONLY: &[(&str, &str)] = &[("Example", "sms.example.net")];
        let table = CarrierTable::new(ONLY);
        assert_eq!(
            resolve_address("1", "Example", &table).unwrap(),
            "1@sms.example.net"
        );
        assert!(table.domain("Verizon").is_none());
    }
}
