//! Update collection
//!
//! A [`UiAgent`] collects the targeted updates one handler invocation emits.
//! The runtime creates a fresh agent per invocation and drains it when the
//! handler returns, so the batch is released on every exit path.

use tracing::debug;

use crate::locator::Locator;
use crate::update::{UpdateMessage, Updater};

/// Per-invocation collector for targeted updates.
#[derive(Debug, Default)]
pub struct UiAgent {
    updates: Vec<UpdateMessage>,
}

impl UiAgent {
    /// Create an empty agent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one targeted update for the located node.
    ///
    /// An empty updater is dropped rather than queued.
    pub fn smart_update(&mut self, locator: Locator, updater: Updater) {
        if updater.is_empty() {
            debug!(%locator, "dropping empty update");
            return;
        }
        self.updates.push(updater.into_message(locator));
    }

    /// Updates queued so far.
    pub fn updates(&self) -> &[UpdateMessage] {
        &self.updates
    }

    /// Consume the agent, yielding the update batch.
    pub fn into_updates(self) -> Vec<UpdateMessage> {
        self.updates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smart_update_queues_one_message() {
        let mut agent = UiAgent::new();
        agent.smart_update(Locator::of_id("lbUserId"), Updater::new().value("alice"));

        assert_eq!(agent.updates().len(), 1);
        let batch = agent.into_updates();
        assert_eq!(batch[0].locator, Locator::of_id("lbUserId"));
        assert_eq!(batch[0].fields["value"], "alice");
    }

    #[test]
    fn test_empty_updater_is_dropped() {
        let mut agent = UiAgent::new();
        agent.smart_update(Locator::This, Updater::new());
        assert!(agent.updates().is_empty());
    }

    #[test]
    fn test_updates_preserve_emission_order() {
        let mut agent = UiAgent::new();
        agent.smart_update(Locator::of_id("a"), Updater::new().value("1"));
        agent.smart_update(Locator::of_id("b"), Updater::new().value("2"));
        let batch = agent.into_updates();
        assert_eq!(batch[0].locator, Locator::of_id("a"));
        assert_eq!(batch[1].locator, Locator::of_id("b"));
    }
}
