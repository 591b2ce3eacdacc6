//! The simple form screen
//!
//! A three-field form (user id, display name, password) where every edit is
//! mirrored live into an adjacent label, plus a submit button that records
//! the three values. The page declaration reads top to bottom in the same
//! order the client renders it.

use tracing::warn;
use veneer_runtime::{ActionContext, ClientEvent, RuntimeError, StatelessScreen};
use veneer_ui::prelude::*;

/// Route path the screen is registered at.
pub const ROUTE: &str = "/simple";

const SIMPLE_CSS: &str = "/css/simple.css";

/// Wire name of the change handler.
pub const INPUT_UPDATE: &str = "inputUpdate";
/// Wire name of the submit handler.
pub const SEND_FORM_DATA: &str = "sendFormData";

/// The demo screen. Stateless: holds nothing between events.
pub struct SimpleForm;

impl SimpleForm {
    /// Build the page's root node sequence.
    pub fn index() -> Vec<UiNode> {
        vec![
            style_src(SIMPLE_CSS),
            vlayout(vec![
                label("Simple form demo").with_sclass("main-title"),
                hlayout(vec![
                    textbox("tbUserId")
                        .with_placeholder("User Id")
                        .with_constraint("no empty")
                        .with_width("200px")
                        .with_instant(true)
                        .with_action(Self::input_update_binding()),
                    textbox("tbUserDisplayName")
                        .with_placeholder("User display name")
                        .with_width("200px")
                        .with_instant(true)
                        .with_action(Self::input_update_binding()),
                    textbox("tbUserPassword")
                        .with_placeholder("Password")
                        .with_input_type("password")
                        .with_width("200px")
                        .with_instant(true)
                        .with_action(Self::input_update_binding()),
                ])
                .with_hflex("min"),
                Self::display_label_row("lbUserId", "User Id").with_style("padding-top: 20px;"),
                Self::display_label_row("lbUserDisplayName", "User Name"),
                Self::display_label_row("lbUserPassword", "User Password"),
                button("Send data").with_id("btnSend").with_action(
                    ActionBinding::on_click(SEND_FORM_DATA)
                        .sample(VarTarget::id("tbUserId"), "value")
                        .sample(VarTarget::id("tbUserDisplayName"), "value")
                        .sample(VarTarget::id("tbUserPassword"), "value"),
                ),
            ])
            .with_hflex("min")
            .with_sclass("main-view"),
        ]
    }

    /// Change binding shared by the three textboxes: sample the edited value
    /// and the source id at fire time.
    fn input_update_binding() -> ActionBinding {
        ActionBinding::on_change(INPUT_UPDATE)
            .sample(VarTarget::This, "value")
            .sample(VarTarget::This, "id")
    }

    /// Caption + value label pair of fixed width, the template for one
    /// mirror row.
    fn display_label_row(id: &str, title: &str) -> UiNode {
        hlayout(vec![
            label(format!("{title}: "))
                .with_id(format!("{id}Label"))
                .with_sclass("data-label"),
            label_with_id(id).with_sclass("data-content"),
        ])
        .with_width("600px")
    }

    /// Mirror an edited value into the matching label.
    ///
    /// The target id is the source id with its leading character replaced by
    /// `l` (`tbUserId` becomes `lbUserId`). Source ids shorter than two
    /// characters don't fit the convention; those edits are logged and
    /// dropped.
    fn input_update(&self, new_value: &str, source_id: &str, ctx: &mut ActionContext<'_>) {
        ctx.sink.log("Recieved onChange");
        let mut rest = source_id.chars();
        if rest.next().is_none() || rest.as_str().is_empty() {
            warn!(source_id, "source id too short for label mirroring, dropping update");
            return;
        }
        let target_label_id = format!("l{}", rest.as_str());
        ctx.agent
            .smart_update(Locator::of_id(target_label_id), Updater::new().value(new_value));
    }

    /// Record the submitted values. Emits no updates.
    fn send_form_data(
        &self,
        user_id: &str,
        display_name: &str,
        password: &str,
        ctx: &mut ActionContext<'_>,
    ) {
        ctx.sink
            .log(&format!("do something with data [{user_id}, {display_name}, {password}]"));
    }
}

impl StatelessScreen for SimpleForm {
    fn build(&self) -> Vec<UiNode> {
        Self::index()
    }

    fn dispatch(
        &self,
        event: &ClientEvent,
        ctx: &mut ActionContext<'_>,
    ) -> Result<(), RuntimeError> {
        match (event.handler.as_str(), event.values.as_slice()) {
            (INPUT_UPDATE, [new_value, source_id]) => {
                self.input_update(new_value, source_id, ctx);
                Ok(())
            }
            (SEND_FORM_DATA, [user_id, display_name, password]) => {
                self.send_form_data(user_id, display_name, password, ctx);
                Ok(())
            }
            (INPUT_UPDATE | SEND_FORM_DATA, values) => Err(RuntimeError::VariableArity {
                handler: event.handler.clone(),
                expected: if event.handler == INPUT_UPDATE { 2 } else { 3 },
                got: values.len(),
            }),
            (other, _) => Err(RuntimeError::UnhandledAction(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veneer_runtime::MemorySink;
    use veneer_ui::UiAgent;

    fn run_input_update(new_value: &str, source_id: &str) -> Vec<UpdateMessage> {
        let sink = MemorySink::new();
        let mut agent = UiAgent::new();
        let mut ctx = ActionContext {
            agent: &mut agent,
            sink: &sink,
        };
        SimpleForm.input_update(new_value, source_id, &mut ctx);
        agent.into_updates()
    }

    #[test]
    fn test_input_update_targets_mirror_label() {
        let updates = run_input_update("alice", "tbUserId");
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].locator, Locator::of_id("lbUserId"));
        assert_eq!(updates[0].fields["value"], "alice");
    }

    #[test]
    fn test_input_update_propagates_empty_value() {
        let updates = run_input_update("", "tbUserId");
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].fields["value"], "");
    }

    #[test]
    fn test_input_update_drops_malformed_source_id() {
        assert!(run_input_update("alice", "").is_empty());
        assert!(run_input_update("alice", "t").is_empty());
    }

    #[test]
    fn test_send_form_data_logs_and_emits_nothing() {
        let sink = MemorySink::new();
        let mut agent = UiAgent::new();
        let mut ctx = ActionContext {
            agent: &mut agent,
            sink: &sink,
        };
        SimpleForm.send_form_data("u", "d", "p", &mut ctx);

        assert!(agent.updates().is_empty());
        assert_eq!(sink.messages(), vec!["do something with data [u, d, p]"]);
    }

    #[test]
    fn test_dispatch_rejects_unknown_handler() {
        let sink = MemorySink::new();
        let mut agent = UiAgent::new();
        let mut ctx = ActionContext {
            agent: &mut agent,
            sink: &sink,
        };
        let event = ClientEvent::new(EventKind::Click, "nope");
        assert!(matches!(
            SimpleForm.dispatch(&event, &mut ctx),
            Err(RuntimeError::UnhandledAction(_))
        ));
    }
}
