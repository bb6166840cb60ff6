//! In-memory item catalog
//!
//! Items are kept in a `Vec` so iteration follows insertion order and a
//! rename can change an entry's key without moving it.

use super::models::Item;
use crate::error::GroceryError;
use tracing::debug;

/// Canonical key for an item name: trimmed and lower-cased.
///
/// Every lookup in [`Catalog`] goes through this function, so callers can
/// pass names in whatever case the user typed.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// The set of grocery items for one list session, unique by name.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, name: &str) -> Option<&Item> {
        self.position(&normalize_name(name)).map(|i| &self.items[i])
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name == key)
    }

    /// Appends a new item. Fails if the name is already present in any case.
    pub fn add(&mut self, name: &str, quantity: &str) -> Result<&Item, GroceryError> {
        let key = normalize_name(name);
        if key.is_empty() {
            return Err(GroceryError::MissingField("name"));
        }
        if self.position(&key).is_some() {
            return Err(GroceryError::DuplicateItem(key));
        }

        debug!(name = %key, quantity, "adding item");
        self.items.push(Item {
            name: key,
            quantity: quantity.to_string(),
        });
        let idx = self.items.len() - 1;
        Ok(&self.items[idx])
    }

    /// Removes an item and returns it.
    pub fn remove(&mut self, name: &str) -> Result<Item, GroceryError> {
        let key = normalize_name(name);
        let idx = self
            .position(&key)
            .ok_or_else(|| GroceryError::NotFound(key.clone()))?;

        debug!(name = %key, "removing item");
        Ok(self.items.remove(idx))
    }

    /// Replaces the quantity of an existing item, leaving name and position alone.
    pub fn update_quantity(
        &mut self,
        name: &str,
        new_quantity: &str,
    ) -> Result<&Item, GroceryError> {
        let key = normalize_name(name);
        let idx = self
            .position(&key)
            .ok_or_else(|| GroceryError::NotFound(key.clone()))?;

        debug!(name = %key, quantity = new_quantity, "updating quantity");
        let item = &mut self.items[idx];
        item.quantity = new_quantity.to_string();
        Ok(item)
    }

    /// Re-keys an item in place. Renaming to the same name (in any case)
    /// succeeds without change.
    pub fn rename(&mut self, name: &str, new_name: &str) -> Result<&Item, GroceryError> {
        let old_key = normalize_name(name);
        let new_key = normalize_name(new_name);
        if new_key.is_empty() {
            return Err(GroceryError::MissingField("new name"));
        }

        let idx = self
            .position(&old_key)
            .ok_or_else(|| GroceryError::NotFound(old_key.clone()))?;
        if new_key != old_key && self.position(&new_key).is_some() {
            return Err(GroceryError::DuplicateItem(new_key));
        }

        debug!(from = %old_key, to = %new_key, "renaming item");
        let item = &mut self.items[idx];
        item.name = new_key;
        Ok(item)
    }

    /// Lazily renders `"<name>: <quantity>"` per item in insertion order.
    /// Call again to restart.
    pub fn to_display_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.items.iter().map(Item::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_with(entries: &[(&str, &str)]) -> Catalog {
        let mut catalog = Catalog::new();
        for (name, quantity) in entries {
            catalog.add(name, quantity).unwrap();
        }
        catalog
    }

    fn lines(catalog: &Catalog) -> Vec<String> {
        catalog.to_display_lines().collect()
    }

    #[test]
    fn add_stores_lower_cased_name_in_order() {
        let catalog = catalog_with(&[("Milk", "2"), ("Eggs", "12"), ("bread", "1")]);
        assert_eq!(lines(&catalog), vec!["milk: 2", "eggs: 12", "bread: 1"]);
    }

    #[test]
    fn duplicate_add_is_rejected_and_catalog_unchanged() {
        let mut catalog = catalog_with(&[("Milk", "2")]);

        let err = catalog.add("milk", "3").unwrap_err();
        assert!(matches!(err, GroceryError::DuplicateItem(ref n) if n == "milk"));

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("MILK").unwrap().quantity, "2");
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut catalog = Catalog::new();
        assert!(matches!(
            catalog.add("   ", "1"),
            Err(GroceryError::MissingField("name"))
        ));
        assert!(catalog.is_empty());
    }

    #[test]
    fn remove_absent_item_is_not_found() {
        let mut catalog = catalog_with(&[("milk", "2")]);
        assert!(matches!(
            catalog.remove("eggs"),
            Err(GroceryError::NotFound(_))
        ));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn remove_is_case_insensitive() {
        let mut catalog = catalog_with(&[("milk", "2"), ("eggs", "12")]);
        let removed = catalog.remove("Milk").unwrap();
        assert_eq!(removed.name, "milk");
        assert_eq!(lines(&catalog), vec!["eggs: 12"]);
    }

    #[test]
    fn update_quantity_changes_only_that_item() {
        let mut catalog = catalog_with(&[("milk", "2"), ("eggs", "12")]);
        catalog.update_quantity("EGGS", "6").unwrap();
        assert_eq!(lines(&catalog), vec!["milk: 2", "eggs: 6"]);
    }

    #[test]
    fn quantity_is_stored_as_given() {
        let mut catalog = catalog_with(&[("eggs", " 1 dozen ")]);
        assert_eq!(catalog.get("eggs").unwrap().quantity, " 1 dozen ");

        catalog.update_quantity("eggs", "6 ").unwrap();
        assert_eq!(catalog.get("eggs").unwrap().quantity, "6 ");
    }

    #[test]
    fn update_quantity_on_absent_item_is_not_found() {
        let mut catalog = Catalog::new();
        assert!(matches!(
            catalog.update_quantity("milk", "1"),
            Err(GroceryError::NotFound(_))
        ));
    }

    #[test]
    fn rename_keeps_position_and_round_trips() {
        let mut catalog = catalog_with(&[("milk", "2"), ("eggs", "12"), ("bread", "1")]);
        let before = lines(&catalog);

        catalog.rename("eggs", "Duck Eggs").unwrap();
        assert_eq!(lines(&catalog), vec!["milk: 2", "duck eggs: 12", "bread: 1"]);
        assert!(catalog.get("eggs").is_none());

        catalog.rename("duck eggs", "eggs").unwrap();
        assert_eq!(lines(&catalog), before);
    }

    #[test]
    fn rename_onto_existing_name_is_rejected() {
        let mut catalog = catalog_with(&[("milk", "2"), ("eggs", "12")]);
        assert!(matches!(
            catalog.rename("milk", "EGGS"),
            Err(GroceryError::DuplicateItem(ref n)) if n == "eggs"
        ));
        assert_eq!(lines(&catalog), vec!["milk: 2", "eggs: 12"]);
    }

    #[test]
    fn rename_to_same_name_in_other_case_is_a_no_op() {
        let mut catalog = catalog_with(&[("milk", "2")]);
        catalog.rename("milk", "MILK").unwrap();
        assert_eq!(lines(&catalog), vec!["milk: 2"]);
    }

    #[test]
    fn rename_absent_item_is_not_found() {
        let mut catalog = catalog_with(&[("milk", "2")]);
        assert!(matches!(
            catalog.rename("eggs", "duck eggs"),
            Err(GroceryError::NotFound(_))
        ));
    }

    #[test]
    fn display_lines_can_be_restarted() {
        let catalog = catalog_with(&[("milk", "2"), ("eggs", "12")]);
        let first: Vec<_> = catalog.to_display_lines().collect();
        let second: Vec<_> = catalog.to_display_lines().collect();
        assert_eq!(first, second);
    }
}
