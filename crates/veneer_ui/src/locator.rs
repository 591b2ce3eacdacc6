//! Node locators
//!
//! Since nodes carry no server-side state, a handler that wants to change the
//! page addresses the target with a [`Locator`]: either by id, or relative to
//! the node the event fired on (self, parent, sibling). Locators are the sole
//! write path back into the client UI; resolution happens against a
//! [`Page`](crate::page::Page).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Selector for one node in the current page tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locator {
    /// The node with the given id.
    ById(String),
    /// The node the event fired on.
    This,
    /// Parent of the source node.
    Parent,
    /// Next sibling of the source node.
    NextSibling,
    /// Previous sibling of the source node.
    PreviousSibling,
}

impl Locator {
    /// Locate a node by id.
    pub fn of_id(id: impl Into<String>) -> Self {
        Locator::ById(id.into())
    }

    /// True for the relative variants, which need a source node to resolve.
    pub fn is_relative(&self) -> bool {
        !matches!(self, Locator::ById(_))
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::ById(id) => write!(f, "#{id}"),
            Locator::This => f.write_str("self"),
            Locator::Parent => f.write_str("parent"),
            Locator::NextSibling => f.write_str("next-sibling"),
            Locator::PreviousSibling => f.write_str("previous-sibling"),
        }
    }
}
