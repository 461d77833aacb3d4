//! Ordered notification log.
//!
//! Observability surface only: every state transition appends one event
//! and emits a structured tracing line. No ledger behavior reads from it.

use veilbatch_types::LedgerEvent;

/// Append-only event recorder.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<LedgerEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event and emit it as a structured log line.
    pub fn record(&mut self, event: LedgerEvent) {
        tracing::info!(%event, "state transition");
        self.events.push(event);
    }

    #[must_use]
    pub fn events(&self) -> &[LedgerEvent] {
        &self.events
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Hand the accumulated events to an external consumer.
    pub fn drain(&mut self) -> Vec<LedgerEvent> {
        std::mem::take(&mut self.events)
    }
}
