use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use anyhow::Result;

// ============================================================================
// Journal Record
// ============================================================================
//
// A domain event plus where it sits in its stream, which command produced
// it and when it was recorded. The event name is taken from the payload
// itself, so an enum of events can share one stream.
//
// ============================================================================

/// Anything that can be recorded in an [`EventJournal`](crate::event_sourcing::EventJournal)
pub trait DomainEvent: Serialize + for<'de> Deserialize<'de> + Clone + Send + Sync {
    /// Payload layout version, bumped when a field changes shape
    const SCHEMA_VERSION: u32 = 1;

    /// Name of the concrete fact, e.g. `PreviewAdded`
    fn event_name(&self) -> &'static str;
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EventEnvelope<E> {
    pub event_id: Uuid,
    pub stream_id: Uuid,
    pub sequence_number: i64,

    pub event_type: String,
    pub schema_version: u32,

    /// Shared by every event one caller's session produced
    pub correlation_id: Uuid,
    /// Command name that caused the event, when known
    pub command: Option<String>,

    pub recorded_at: DateTime<Utc>,
    pub event_data: E,
}

impl<E: DomainEvent> EventEnvelope<E> {
    pub fn new(stream_id: Uuid, sequence_number: i64, event_data: E, correlation_id: Uuid) -> Self {
        Self {
            event_id: Uuid::now_v7(),
            stream_id,
            sequence_number,
            event_type: event_data.event_name().to_string(),
            schema_version: E::SCHEMA_VERSION,
            correlation_id,
            command: None,
            recorded_at: Utc::now(),
            event_data,
        }
    }

    pub fn issued_by(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
