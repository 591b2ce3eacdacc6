//! Action bindings
//!
//! An action is a server-side callback bound to a client event on a specific
//! node. The binding is a plain value embedded in the node at build time;
//! when the tree is rendered, the handler name becomes an identifier the
//! client echoes back when the event fires.
//!
//! Variable sampling is part of the binding contract: the binding declares
//! which fields of which nodes the client must read *at fire time* and send
//! along with the event, rather than the server querying the client ad hoc.
//!
//! ```rust
//! use veneer_ui::prelude::*;
//!
//! let binding = ActionBinding::on_change("inputUpdate")
//!     .sample(VarTarget::This, "value")
//!     .sample(VarTarget::This, "id");
//! ```

use serde::{Deserialize, Serialize};

/// Client event kinds that can carry an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Input value changed (per keystroke when the node is instant).
    Change,
    /// Node was clicked.
    Click,
}

/// Which node a sampled variable is read from.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VarTarget {
    /// The node the event fired on.
    This,
    /// A node addressed by id.
    Id(String),
}

impl VarTarget {
    /// Target a node by id.
    pub fn id(id: impl Into<String>) -> Self {
        VarTarget::Id(id.into())
    }
}

/// One declared variable: a field of a target node, sampled client-side when
/// the event fires.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionVariable {
    pub target: VarTarget,
    pub field: String,
}

/// A server-side callback bound to a client event.
///
/// The handler is identified by name; the runtime routes a fired event back
/// to the screen's dispatch method using it. `variables` are delivered with
/// the event in declaration order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionBinding {
    pub event: EventKind,
    pub handler: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variables: Vec<ActionVariable>,
}

impl ActionBinding {
    /// Bind a handler to the change event.
    pub fn on_change(handler: impl Into<String>) -> Self {
        Self::new(EventKind::Change, handler)
    }

    /// Bind a handler to the click event.
    pub fn on_click(handler: impl Into<String>) -> Self {
        Self::new(EventKind::Click, handler)
    }

    /// Bind a handler to an arbitrary event kind.
    pub fn new(event: EventKind, handler: impl Into<String>) -> Self {
        Self {
            event,
            handler: handler.into(),
            variables: Vec::new(),
        }
    }

    /// Declare a variable to sample from the client state at fire time.
    pub fn sample(mut self, target: VarTarget, field: impl Into<String>) -> Self {
        self.variables.push(ActionVariable {
            target,
            field: field.into(),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variables_keep_declaration_order() {
        let binding = ActionBinding::on_change("inputUpdate")
            .sample(VarTarget::This, "value")
            .sample(VarTarget::This, "id");

        assert_eq!(binding.event, EventKind::Change);
        assert_eq!(binding.handler, "inputUpdate");
        let fields: Vec<_> = binding.variables.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["value", "id"]);
    }

    #[test]
    fn test_click_binding_with_id_targets() {
        let binding = ActionBinding::on_click("sendFormData")
            .sample(VarTarget::id("tbUserId"), "value")
            .sample(VarTarget::id("tbUserDisplayName"), "value")
            .sample(VarTarget::id("tbUserPassword"), "value");

        assert_eq!(binding.variables.len(), 3);
        assert_eq!(binding.variables[0].target, VarTarget::id("tbUserId"));
    }
}
