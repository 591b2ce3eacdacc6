//! Error types for veneer_runtime

use thiserror::Error;
use veneer_ui::UiError;

/// Errors that can occur while routing requests and dispatching events.
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// No screen is registered at the requested path.
    #[error("no screen registered at {0}")]
    UnknownRoute(String),

    /// The fired event names a handler no binding in the page declares.
    #[error("no {event:?} binding for handler {handler} in page")]
    UnknownHandler {
        handler: String,
        event: veneer_ui::EventKind,
    },

    /// The event carries a different number of values than the binding
    /// declares.
    #[error("handler {handler} expects {expected} sampled variables, event carries {got}")]
    VariableArity {
        handler: String,
        expected: usize,
        got: usize,
    },

    /// The screen's dispatch method does not recognize the handler name.
    #[error("screen has no handler named {0}")]
    UnhandledAction(String),

    /// Page construction failed.
    #[error(transparent)]
    Ui(#[from] UiError),

    /// Wire serialization failed.
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}
