//! Error types for veneer_ui

use thiserror::Error;

/// Errors raised by page construction and locator resolution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    /// Two nodes in the same page declare the same id.
    #[error("duplicate node id in page: {0}")]
    DuplicateId(String),

    /// A locator did not resolve to any node in the page.
    #[error("locator {0} matches no node in the page")]
    MissingTarget(String),

    /// A relative locator was resolved without a source node.
    #[error("relative locator {0} resolved without a source node")]
    MissingSourceContext(String),
}
