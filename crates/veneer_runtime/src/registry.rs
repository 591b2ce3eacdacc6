//! Screen routing
//!
//! Maps route paths to registered screens. This is the seam the host's HTTP
//! layer plugs into: `render` produces the serialized page for a request,
//! `fire` runs one event against a freshly built page. Each request is served
//! independently; nothing is cached between invocations.

use rustc_hash::FxHashMap;
use tracing::debug;
use veneer_ui::{Page, UpdateMessage};

use crate::error::RuntimeError;
use crate::screen::{fire, ClientEvent, StatelessScreen};
use crate::sink::LogSink;

/// Route table for stateless screens.
#[derive(Default)]
pub struct ScreenRegistry {
    screens: FxHashMap<String, Box<dyn StatelessScreen>>,
}

impl ScreenRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a screen at a route path, e.g. `/simple`.
    pub fn register(&mut self, path: impl Into<String>, screen: impl StatelessScreen + 'static) {
        let path = path.into();
        debug!(%path, "registering screen");
        self.screens.insert(path, Box::new(screen));
    }

    /// Look up the screen at a path.
    pub fn screen(&self, path: &str) -> Result<&dyn StatelessScreen, RuntimeError> {
        self.screens
            .get(path)
            .map(|s| s.as_ref())
            .ok_or_else(|| RuntimeError::UnknownRoute(path.to_owned()))
    }

    /// Build and index the page for a path.
    pub fn build_page(&self, path: &str) -> Result<Page, RuntimeError> {
        let screen = self.screen(path)?;
        Ok(Page::new(screen.build())?)
    }

    /// Serialize the page for a path to its wire form: a JSON array of root
    /// nodes.
    pub fn render_json(&self, path: &str) -> Result<String, RuntimeError> {
        let page = self.build_page(path)?;
        Ok(serde_json::to_string_pretty(page.roots())?)
    }

    /// Dispatch one client event against the screen at a path.
    ///
    /// The page is rebuilt for validation on every event, mirroring the
    /// stateless contract: the server retains nothing between requests.
    pub fn fire(
        &self,
        path: &str,
        event: &ClientEvent,
        sink: &dyn LogSink,
    ) -> Result<Vec<UpdateMessage>, RuntimeError> {
        let screen = self.screen(path)?;
        let page = Page::new(screen.build())?;
        fire(screen, &page, event, sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::ActionContext;
    use crate::sink::MemorySink;
    use veneer_ui::prelude::*;

    struct BlankScreen;

    impl StatelessScreen for BlankScreen {
        fn build(&self) -> Vec<UiNode> {
            vec![label("blank")]
        }

        fn dispatch(
            &self,
            event: &ClientEvent,
            _ctx: &mut ActionContext<'_>,
        ) -> Result<(), RuntimeError> {
            Err(RuntimeError::UnhandledAction(event.handler.clone()))
        }
    }

    #[test]
    fn test_unknown_route() {
        let registry = ScreenRegistry::new();
        assert!(matches!(
            registry.build_page("/nope").unwrap_err(),
            RuntimeError::UnknownRoute(_)
        ));
    }

    #[test]
    fn test_render_json_is_array_of_roots() {
        let mut registry = ScreenRegistry::new();
        registry.register("/blank", BlankScreen);

        let json = registry.render_json("/blank").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.is_array());
        assert_eq!(value.as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_fire_unbound_event_fails() {
        let mut registry = ScreenRegistry::new();
        registry.register("/blank", BlankScreen);

        let event = ClientEvent::new(EventKind::Click, "missing");
        let err = registry.fire("/blank", &event, &MemorySink::new()).unwrap_err();
        assert!(matches!(err, RuntimeError::UnknownHandler { .. }));
    }
}
