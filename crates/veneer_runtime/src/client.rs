//! Simulated client
//!
//! Stands in for the browser side of the contract: it renders a screen's
//! page, tracks textbox values, samples the declared variables when an event
//! fires and applies the returned updates to its copy of the tree. Used by
//! the end-to-end tests and the demo's replay mode.

use indexmap::IndexMap;
use tracing::warn;

use veneer_ui::{ActionVariable, EventKind, NodeKind, Page, UpdateMessage, VarTarget};

use crate::error::RuntimeError;
use crate::screen::{fire, ClientEvent, StatelessScreen};
use crate::sink::LogSink;

/// A scripted client session against one screen.
pub struct SimulatedClient<'a> {
    screen: &'a dyn StatelessScreen,
    sink: &'a dyn LogSink,
    page: Page,
    inputs: IndexMap<String, String>,
}

impl<'a> SimulatedClient<'a> {
    /// Load the screen, as a browser would on first request.
    pub fn load(screen: &'a dyn StatelessScreen, sink: &'a dyn LogSink) -> Result<Self, RuntimeError> {
        let page = Page::new(screen.build())?;
        let inputs = page
            .iter()
            .filter(|node| node.kind == NodeKind::Textbox)
            .filter_map(|node| {
                node.id
                    .clone()
                    .map(|id| (id, node.text().unwrap_or_default().to_owned()))
            })
            .collect();
        Ok(Self {
            screen,
            sink,
            page,
            inputs,
        })
    }

    /// The client's current copy of the page.
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Current value of a textbox.
    pub fn input_value(&self, id: &str) -> Option<&str> {
        self.inputs.get(id).map(String::as_str)
    }

    /// Current text of a label.
    pub fn label_text(&self, id: &str) -> Option<&str> {
        self.page.find_by_id(id).and_then(|node| node.text())
    }

    /// Type into a textbox, firing its change action if one is bound.
    ///
    /// Returns the update batch the server sent back, already applied to the
    /// client's page copy.
    pub fn edit(&mut self, id: &str, value: &str) -> Result<Vec<UpdateMessage>, RuntimeError> {
        self.inputs.insert(id.to_owned(), value.to_owned());
        self.fire_from(id, EventKind::Change)
    }

    /// Click a node, firing its click action.
    pub fn click(&mut self, id: &str) -> Result<Vec<UpdateMessage>, RuntimeError> {
        self.fire_from(id, EventKind::Click)
    }

    fn fire_from(&mut self, id: &str, event: EventKind) -> Result<Vec<UpdateMessage>, RuntimeError> {
        let binding = self
            .page
            .find_by_id(id)
            .and_then(|node| node.action.as_ref())
            .filter(|action| action.event == event)
            .ok_or_else(|| RuntimeError::UnknownHandler {
                handler: format!("<{event:?} on #{id}>"),
                event,
            })?;

        let mut client_event = ClientEvent::new(event, binding.handler.as_str()).from_node(id);
        for variable in &binding.variables {
            client_event = client_event.with_value(self.sample(variable, id));
        }

        let updates = fire(self.screen, &self.page, &client_event, self.sink)?;
        for update in &updates {
            self.page.apply(update, Some(id));
        }
        Ok(updates)
    }

    /// Read one declared variable from the client's current state.
    fn sample(&self, variable: &ActionVariable, source_id: &str) -> String {
        let target_id = match &variable.target {
            VarTarget::This => source_id,
            VarTarget::Id(id) => id.as_str(),
        };
        match variable.field.as_str() {
            "id" => target_id.to_owned(),
            "value" => self
                .inputs
                .get(target_id)
                .cloned()
                .or_else(|| {
                    self.page
                        .find_by_id(target_id)
                        .and_then(|node| node.text().map(str::to_owned))
                })
                .unwrap_or_default(),
            other => {
                warn!(field = other, target = target_id, "unsupported sampled field");
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::ActionContext;
    use crate::sink::MemorySink;
    use veneer_ui::prelude::*;

    struct MirrorScreen;

    impl StatelessScreen for MirrorScreen {
        fn build(&self) -> Vec<UiNode> {
            vec![
                textbox("tbName").with_action(
                    ActionBinding::on_change("mirror")
                        .sample(VarTarget::This, "value")
                        .sample(VarTarget::This, "id"),
                ),
                label_with_id("lbName"),
            ]
        }

        fn dispatch(
            &self,
            event: &ClientEvent,
            ctx: &mut ActionContext<'_>,
        ) -> Result<(), RuntimeError> {
            match event.handler.as_str() {
                "mirror" => {
                    ctx.agent.smart_update(
                        Locator::of_id("lbName"),
                        Updater::new().value(event.values[0].as_str()),
                    );
                    Ok(())
                }
                other => Err(RuntimeError::UnhandledAction(other.to_owned())),
            }
        }
    }

    #[test]
    fn test_load_seeds_textbox_values() {
        let sink = MemorySink::new();
        let client = SimulatedClient::load(&MirrorScreen, &sink).unwrap();
        assert_eq!(client.input_value("tbName"), Some(""));
    }

    #[test]
    fn test_edit_round_trips_to_label() {
        let sink = MemorySink::new();
        let mut client = SimulatedClient::load(&MirrorScreen, &sink).unwrap();

        let updates = client.edit("tbName", "alice").unwrap();
        assert_eq!(updates.len(), 1);
        assert_eq!(client.label_text("lbName"), Some("alice"));
    }

    #[test]
    fn test_click_without_binding_is_an_error() {
        let sink = MemorySink::new();
        let mut client = SimulatedClient::load(&MirrorScreen, &sink).unwrap();
        assert!(client.click("tbName").is_err());
    }
}
