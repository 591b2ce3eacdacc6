//! Veneer Screen Runtime
//!
//! Hosts stateless screens on top of [`veneer_ui`]:
//!
//! - **Screens**: The [`StatelessScreen`] trait, a server-side screen handler
//!   returning a declarative tree
//! - **Routing**: [`ScreenRegistry`] maps request paths to screens and
//!   renders pages to their wire form
//! - **Dispatch**: [`fire`] validates a [`ClientEvent`] against the page's
//!   bindings and collects the handler's update batch
//! - **Log sink**: [`LogSink`] for application messages, with a `tracing`
//!   default and an in-memory test capture
//! - **Simulation**: [`SimulatedClient`] plays the browser role for tests and
//!   demos
//!
//! # Example
//!
//! ```rust
//! use veneer_runtime::{ScreenRegistry, StatelessScreen, ClientEvent, ActionContext, RuntimeError};
//! use veneer_ui::prelude::*;
//!
//! struct Hello;
//!
//! impl StatelessScreen for Hello {
//!     fn build(&self) -> Vec<UiNode> {
//!         vec![label("hello")]
//!     }
//!
//!     fn dispatch(
//!         &self,
//!         event: &ClientEvent,
//!         _ctx: &mut ActionContext<'_>,
//!     ) -> Result<(), RuntimeError> {
//!         Err(RuntimeError::UnhandledAction(event.handler.clone()))
//!     }
//! }
//!
//! let mut registry = ScreenRegistry::new();
//! registry.register("/hello", Hello);
//! let json = registry.render_json("/hello").unwrap();
//! assert!(json.contains("hello"));
//! ```

pub mod client;
pub mod error;
pub mod registry;
pub mod screen;
pub mod sink;

pub use client::SimulatedClient;
pub use error::RuntimeError;
pub use registry::ScreenRegistry;
pub use screen::{fire, ActionContext, ClientEvent, StatelessScreen};
pub use sink::{LogSink, MemorySink, TracingSink};
