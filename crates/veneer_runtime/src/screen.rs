//! Stateless screens and event dispatch
//!
//! A [`StatelessScreen`] is a server-side screen handler that returns a
//! declarative node tree instead of rendering markup directly. No per-session
//! state is kept between events; every [`ClientEvent`] carries the variables
//! its binding declared, sampled client-side at fire time.
//!
//! Dispatch flow:
//!
//! ```text
//! ClientEvent (handler, sampled values)
//!     ↓ fire() validates against the page's bindings
//! StatelessScreen::dispatch
//!     ↓ handler writes through ActionContext
//! UiAgent drained → Vec<UpdateMessage> back to the client
//! ```

use tracing::debug;
use veneer_ui::{EventKind, Page, UiAgent, UiNode, UpdateMessage};

use crate::error::RuntimeError;
use crate::sink::LogSink;

/// One event fired by the client.
///
/// `values` are the binding's declared variables in declaration order;
/// `source_id` is the id of the node the event fired on, used to resolve
/// relative locators in the resulting updates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientEvent {
    pub handler: String,
    pub event: EventKind,
    pub source_id: Option<String>,
    pub values: Vec<String>,
}

impl ClientEvent {
    /// Build an event for the named handler.
    pub fn new(event: EventKind, handler: impl Into<String>) -> Self {
        Self {
            handler: handler.into(),
            event,
            source_id: None,
            values: Vec::new(),
        }
    }

    /// Record the node the event fired on.
    pub fn from_node(mut self, source_id: impl Into<String>) -> Self {
        self.source_id = Some(source_id.into());
        self
    }

    /// Append one sampled value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.values.push(value.into());
        self
    }
}

/// Per-invocation handler context: the update collector and the log sink.
///
/// Acquired when dispatch starts and released when it returns, on every exit
/// path.
pub struct ActionContext<'a> {
    pub agent: &'a mut UiAgent,
    pub sink: &'a dyn LogSink,
}

/// A stateless server-side screen.
///
/// `build` must be pure: two invocations yield structurally identical trees.
pub trait StatelessScreen: Send + Sync {
    /// Produce the page's root node sequence.
    fn build(&self) -> Vec<UiNode>;

    /// Run the handler named by `event`, writing updates through `ctx`.
    ///
    /// Returns [`RuntimeError::UnhandledAction`] for handler names this
    /// screen does not implement.
    fn dispatch(&self, event: &ClientEvent, ctx: &mut ActionContext<'_>)
        -> Result<(), RuntimeError>;
}

/// Validate an event against the page's bindings and run the screen's
/// handler, returning the update batch.
///
/// Events from one session arrive one at a time; screens hold no mutable
/// state, so concurrent sessions need no locking.
pub fn fire(
    screen: &dyn StatelessScreen,
    page: &Page,
    event: &ClientEvent,
    sink: &dyn LogSink,
) -> Result<Vec<UpdateMessage>, RuntimeError> {
    let binding = page
        .iter()
        .filter_map(|node| node.action.as_ref())
        .find(|action| action.handler == event.handler && action.event == event.event)
        .ok_or_else(|| RuntimeError::UnknownHandler {
            handler: event.handler.clone(),
            event: event.event,
        })?;

    if binding.variables.len() != event.values.len() {
        return Err(RuntimeError::VariableArity {
            handler: event.handler.clone(),
            expected: binding.variables.len(),
            got: event.values.len(),
        });
    }

    debug!(handler = %event.handler, event = ?event.event, "dispatching action");
    let mut agent = UiAgent::new();
    let mut ctx = ActionContext {
        agent: &mut agent,
        sink,
    };
    screen.dispatch(event, &mut ctx)?;
    Ok(agent.into_updates())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;
    use veneer_ui::prelude::*;

    struct EchoScreen;

    impl StatelessScreen for EchoScreen {
        fn build(&self) -> Vec<UiNode> {
            vec![
                textbox("tb").with_action(
                    ActionBinding::on_change("echo").sample(VarTarget::This, "value"),
                ),
                label_with_id("lb"),
            ]
        }

        fn dispatch(
            &self,
            event: &ClientEvent,
            ctx: &mut ActionContext<'_>,
        ) -> Result<(), RuntimeError> {
            match event.handler.as_str() {
                "echo" => {
                    ctx.agent
                        .smart_update(Locator::of_id("lb"), Updater::new().value(event.values[0].as_str()));
                    Ok(())
                }
                other => Err(RuntimeError::UnhandledAction(other.to_owned())),
            }
        }
    }

    #[test]
    fn test_fire_runs_bound_handler() {
        let screen = EchoScreen;
        let page = Page::new(screen.build()).unwrap();
        let event = ClientEvent::new(EventKind::Change, "echo")
            .from_node("tb")
            .with_value("hello");

        let updates = fire(&screen, &page, &event, &MemorySink::new()).unwrap();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].locator, Locator::of_id("lb"));
        assert_eq!(updates[0].fields["value"], "hello");
    }

    #[test]
    fn test_fire_rejects_unbound_handler() {
        let screen = EchoScreen;
        let page = Page::new(screen.build()).unwrap();
        let event = ClientEvent::new(EventKind::Click, "echo");

        let err = fire(&screen, &page, &event, &MemorySink::new()).unwrap_err();
        assert!(matches!(err, RuntimeError::UnknownHandler { .. }));
    }

    #[test]
    fn test_fire_rejects_wrong_arity() {
        let screen = EchoScreen;
        let page = Page::new(screen.build()).unwrap();
        let event = ClientEvent::new(EventKind::Change, "echo").from_node("tb");

        let err = fire(&screen, &page, &event, &MemorySink::new()).unwrap_err();
        assert!(matches!(
            err,
            RuntimeError::VariableArity {
                expected: 1,
                got: 0,
                ..
            }
        ));
    }
}
