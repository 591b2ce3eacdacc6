//! Targeted updates
//!
//! An [`Updater`] bundles the property changes a handler wants to apply to
//! one located node; pairing it with a [`Locator`] yields the
//! [`UpdateMessage`] sent to the client. Field order is preserved on the
//! wire.
//!
//! ```rust
//! use veneer_ui::prelude::*;
//!
//! let msg = Updater::new()
//!     .value("alice")
//!     .into_message(Locator::of_id("lbUserId"));
//! assert_eq!(msg.fields.get("value").map(String::as_str), Some("alice"));
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::locator::Locator;

/// Chainable bundle of property changes for one node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Updater {
    fields: IndexMap<String, String>,
}

impl Updater {
    /// Create an empty updater.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the node's `value` property (label text, textbox content).
    pub fn value(self, value: impl Into<String>) -> Self {
        self.field("value", value)
    }

    /// Set the node's style class.
    pub fn sclass(self, sclass: impl Into<String>) -> Self {
        self.field("sclass", sclass)
    }

    /// Set an arbitrary property.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Attach a target locator, producing the wire message.
    pub fn into_message(self, locator: Locator) -> UpdateMessage {
        UpdateMessage {
            locator,
            fields: self.fields,
        }
    }
}

/// One targeted update: a locator plus the fields to write.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateMessage {
    pub locator: Locator,
    pub fields: IndexMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins_per_field() {
        let updater = Updater::new().value("first").value("second");
        let msg = updater.into_message(Locator::of_id("lbUserId"));
        assert_eq!(msg.fields.len(), 1);
        assert_eq!(msg.fields["value"], "second");
    }

    #[test]
    fn test_field_order_is_insertion_order() {
        let msg = Updater::new()
            .field("b", "1")
            .field("a", "2")
            .into_message(Locator::This);
        let keys: Vec<_> = msg.fields.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }
}
