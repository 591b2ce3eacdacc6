//! Veneer Simple Form Demo
//!
//! A single demonstration screen for the Veneer stateless screen runtime: a
//! form with three input fields, a live echo of each field into an adjacent
//! label, and a submit button that records the three values. The screen is
//! served at `/simple`; the referenced stylesheet `/css/simple.css` is
//! expected to be delivered by the host.

use veneer_runtime::ScreenRegistry;

pub mod simple_form;

pub use simple_form::{SimpleForm, ROUTE};

/// Build a registry with the demo screen mounted at its route.
pub fn registry() -> ScreenRegistry {
    let mut registry = ScreenRegistry::new();
    registry.register(ROUTE, SimpleForm);
    registry
}
