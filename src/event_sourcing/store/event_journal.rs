use uuid::Uuid;
use anyhow::{Result, bail};

use crate::event_sourcing::core::{DomainEvent, EventEnvelope};

// ============================================================================
// In-Memory Event Journal
// ============================================================================
//
// Append-only list of envelopes for a single stream.
//
// Responsibilities:
// 1. Append events with an optimistic expected-version check
// 2. Keep sequence numbers contiguous, starting at 1
// 3. Hand back history for inspection or publishing
//
// ============================================================================

#[derive(Debug, Clone)]
pub struct EventJournal<E: DomainEvent> {
    stream_id: Uuid,
    events: Vec<EventEnvelope<E>>,
}

impl<E: DomainEvent> EventJournal<E> {
    pub fn new(stream_id: Uuid) -> Self {
        Self {
            stream_id,
            events: Vec::new(),
        }
    }

    pub fn stream_id(&self) -> Uuid {
        self.stream_id
    }

    /// Sequence number of the last appended event, 0 when empty
    pub fn current_version(&self) -> i64 {
        self.events.last().map_or(0, |e| e.sequence_number)
    }

    /// Append events to the journal.
    /// Returns the new version number after appending.
    pub fn append_events(
        &mut self,
        expected_version: i64,
        events: Vec<EventEnvelope<E>>,
    ) -> Result<i64> {
        if events.is_empty() {
            bail!("Cannot append empty event list");
        }

        let current_version = self.current_version();
        if current_version != expected_version {
            bail!(
                "Concurrency conflict: expected version {}, but current is {}",
                expected_version,
                current_version
            );
        }

        let mut new_version = expected_version;
        for envelope in &events {
            new_version += 1;
            if envelope.stream_id != self.stream_id {
                bail!(
                    "Event {} belongs to stream {}, not {}",
                    envelope.event_id,
                    envelope.stream_id,
                    self.stream_id
                );
            }
            if envelope.sequence_number != new_version {
                bail!(
                    "Out of order event: expected sequence {}, got {}",
                    new_version,
                    envelope.sequence_number
                );
            }
        }

        tracing::debug!(
            stream_id = %self.stream_id,
            appended = events.len(),
            new_version = new_version,
            "Events appended to journal"
        );

        self.events.extend(events);
        Ok(new_version)
    }

    pub fn load_events(&self) -> &[EventEnvelope<E>] {
        &self.events
    }

    /// Events after `version`, oldest first
    pub fn events_since(&self, version: i64) -> impl Iterator<Item = &EventEnvelope<E>> {
        self.events.iter().filter(move |e| e.sequence_number > version)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
