//! Veneer UI Tree
//!
//! This crate provides the declarative core of the Veneer framework:
//!
//! - **Node builders**: Immutable page trees built with fluent, chainable
//!   constructors
//! - **Action bindings**: Server-side callbacks bound to client events, with
//!   declared variable sampling
//! - **Locators**: Id-based and relative selection, the sole write path back
//!   into the client UI
//! - **Targeted updates**: Property-change bundles collected per handler
//!   invocation by a [`UiAgent`]
//!
//! # Example
//!
//! ```rust
//! use veneer_ui::prelude::*;
//!
//! let roots = vec![
//!     style_src("/css/simple.css"),
//!     vlayout(vec![
//!         label("Simple form demo").with_sclass("main-title"),
//!         textbox("tbUserId")
//!             .with_placeholder("User Id")
//!             .with_instant(true)
//!             .with_action(
//!                 ActionBinding::on_change("inputUpdate")
//!                     .sample(VarTarget::This, "value")
//!                     .sample(VarTarget::This, "id"),
//!             ),
//!         label_with_id("lbUserId"),
//!     ]),
//! ];
//!
//! let page = Page::new(roots).unwrap();
//! let mut agent = UiAgent::new();
//! agent.smart_update(Locator::of_id("lbUserId"), Updater::new().value("alice"));
//! assert_eq!(agent.updates().len(), 1);
//! ```

pub mod action;
pub mod agent;
pub mod error;
pub mod locator;
pub mod node;
pub mod page;
pub mod update;

// Core types
pub use action::{ActionBinding, ActionVariable, EventKind, VarTarget};
pub use agent::UiAgent;
pub use error::UiError;
pub use locator::Locator;
pub use node::{NodeKind, NodeProps, UiNode};
pub use page::Page;
pub use update::{UpdateMessage, Updater};

// Builder API
pub use node::{button, hlayout, label, label_with_id, style_src, textbox, vlayout};

pub mod prelude {
    pub use crate::action::{ActionBinding, ActionVariable, EventKind, VarTarget};
    pub use crate::agent::UiAgent;
    pub use crate::error::UiError;
    pub use crate::locator::Locator;
    pub use crate::node::{
        button, hlayout, label, label_with_id, style_src, textbox, vlayout, NodeKind, NodeProps,
        UiNode,
    };
    pub use crate::page::Page;
    pub use crate::update::{UpdateMessage, Updater};
}
