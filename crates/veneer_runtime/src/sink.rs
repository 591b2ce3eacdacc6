//! Log sink
//!
//! Screens report application-level messages through a [`LogSink`], a
//! process-wide text-logging collaborator with a single entry point. The
//! default sink forwards to `tracing`; tests use [`MemorySink`] to capture
//! and assert on handler output.

use std::sync::Mutex;

use tracing::info;

/// Text-logging collaborator handed to action handlers.
pub trait LogSink: Send + Sync {
    /// Record one message.
    fn log(&self, message: &str);
}

/// Default sink: forwards messages to `tracing` at info level.
#[derive(Debug, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&self, message: &str) {
        info!(target: "veneer::screen", "{message}");
    }
}

/// Capturing sink for tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages recorded so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("sink lock poisoned").clone()
    }
}

impl LogSink for MemorySink {
    fn log(&self, message: &str) {
        self.messages
            .lock()
            .expect("sink lock poisoned")
            .push(message.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_records_in_order() {
        let sink = MemorySink::new();
        sink.log("first");
        sink.log("second");
        assert_eq!(sink.messages(), vec!["first", "second"]);
    }
}
