#![forbid(unsafe_code)]

//! The item model: one named entry on the wheel.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors from item construction and list edits.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemError {
    /// The name was empty (or whitespace only) after trimming.
    #[error("item name must not be empty")]
    EmptyName,
    /// An item with the same name already exists in the list.
    #[error("an item named {0:?} already exists")]
    DuplicateName(String),
}

/// One candidate on the wheel.
///
/// `name` is the unique key within a list. `last_chosen_at` is stamped by the
/// spin state machine when the item wins a spin (and by the "mark" command);
/// `None` means never chosen. Disabled items stay in the list but never enter
/// the candidate set.
///
/// The serde field names (`name`, `last`, `enabled`) are the persisted wire
/// format; `enabled` defaults to `true` when absent.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "last", default))]
    pub last_chosen_at: Option<DateTime<Utc>>,
    #[cfg_attr(feature = "serde", serde(default = "default_enabled"))]
    pub enabled: bool,
}

#[cfg(feature = "serde")]
fn default_enabled() -> bool {
    true
}

impl Item {
    /// Create an enabled, never-chosen item. Trims the name and rejects
    /// empty names.
    pub fn new(name: &str) -> Result<Self, ItemError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ItemError::EmptyName);
        }
        Ok(Self {
            name: name.to_string(),
            last_chosen_at: None,
            enabled: true,
        })
    }

    /// Stamp the last-chosen timestamp.
    pub fn mark_chosen(&mut self, at: DateTime<Utc>) {
        self.last_chosen_at = Some(at);
    }
}

/// Check that `name` is usable as a new entry in `items`.
pub fn validate_new_name(items: &[Item], name: &str) -> Result<(), ItemError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ItemError::EmptyName);
    }
    if items.iter().any(|i| i.name == name) {
        return Err(ItemError::DuplicateName(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_and_enables() {
        let item = Item::new("  Thai Palace ").unwrap();
        assert_eq!(item.name, "Thai Palace");
        assert!(item.enabled);
        assert!(item.last_chosen_at.is_none());
    }

    #[test]
    fn new_rejects_empty() {
        assert_eq!(Item::new("   "), Err(ItemError::EmptyName));
        assert_eq!(Item::new(""), Err(ItemError::EmptyName));
    }

    #[test]
    fn validate_rejects_duplicates() {
        let items = vec![Item::new("Pho 99").unwrap()];
        assert_eq!(
            validate_new_name(&items, "Pho 99"),
            Err(ItemError::DuplicateName("Pho 99".to_string()))
        );
        assert_eq!(
            validate_new_name(&items, " Pho 99 "),
            Err(ItemError::DuplicateName("Pho 99".to_string()))
        );
        assert!(validate_new_name(&items, "Pho 100").is_ok());
    }

    #[test]
    fn mark_chosen_sets_timestamp() {
        let mut item = Item::new("Curry House").unwrap();
        let now = Utc::now();
        item.mark_chosen(now);
        assert_eq!(item.last_chosen_at, Some(now));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn wire_format_uses_original_field_names() {
        let json = r#"{"name":"Taco Cart","last":"2026-08-01T12:00:00Z","enabled":false}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.name, "Taco Cart");
        assert!(!item.enabled);
        assert!(item.last_chosen_at.is_some());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn missing_enabled_defaults_true() {
        let json = r#"{"name":"Taco Cart","last":null}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert!(item.enabled);
        assert!(item.last_chosen_at.is_none());
    }
}
