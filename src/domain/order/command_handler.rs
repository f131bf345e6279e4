use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;
use anyhow::Result;

use crate::event_sourcing::core::EventEnvelope;
use crate::event_sourcing::store::EventJournal;
use crate::metrics::Metrics;

use super::aggregate::{LedgerConfig, OrderLedger};
use super::commands::LedgerCommand;
use super::errors::OrderError;
use super::events::*;
use super::value_objects::OrderTotals;

// ============================================================================
// Ledger Command Handler
// ============================================================================
//
// Orchestrates: Command → Ledger → Events → Journal (+ metrics, logs)
//
// Ledger and journal sit behind one lock, held for the whole command, so
// the capacity limit and the preview/confirmed split hold under concurrent
// callers and journal order matches mutation order.
//
// ============================================================================

struct LedgerState {
    ledger: OrderLedger,
    journal: EventJournal<LedgerEvent>,
}

/// What a command did: the facts it produced and, possibly, why it stopped
#[derive(Default)]
struct Execution {
    events: Vec<LedgerEvent>,
    error: Option<OrderError>,
}

impl Execution {
    fn single(event: LedgerEvent) -> Self {
        Self { events: vec![event], error: None }
    }

    fn failed(error: OrderError) -> Self {
        Self { events: Vec::new(), error: Some(error) }
    }
}

#[derive(Clone)]
pub struct LedgerCommandHandler {
    state: Arc<Mutex<LedgerState>>,
    metrics: Arc<Metrics>,
}

impl LedgerCommandHandler {
    pub fn new(config: LedgerConfig, metrics: Arc<Metrics>) -> Self {
        Self {
            state: Arc::new(Mutex::new(LedgerState {
                ledger: OrderLedger::with_config(config),
                journal: EventJournal::new(Uuid::new_v4()),
            })),
            metrics,
        }
    }

    pub async fn stream_id(&self) -> Uuid {
        self.state.lock().await.journal.stream_id()
    }

    pub fn metrics(&self) -> &Arc<Metrics> {
        &self.metrics
    }

    /// Handle a command and journal the resulting events.
    /// Returns the journal version after the command.
    ///
    /// Rejections surface as an [`OrderError`] inside the `anyhow::Error`.
    /// A capacity rejection still journals the boxes that fit. Metrics only
    /// count events the journal accepted.
    pub async fn handle(&self, command: LedgerCommand, correlation_id: Uuid) -> Result<i64> {
        let mut state = self.state.lock().await;
        let stream_id = state.journal.stream_id();
        let expected_version = state.journal.current_version();

        let Execution { events, error } = Self::execute(&mut state.ledger, &command);

        let mut version = expected_version;
        if !events.is_empty() {
            let envelopes = events
                .into_iter()
                .enumerate()
                .map(|(offset, event)| {
                    let sequence_number = expected_version + offset as i64 + 1;
                    EventEnvelope::new(stream_id, sequence_number, event, correlation_id)
                        .issued_by(command.name())
                })
                .collect();

            version = state.journal.append_events(expected_version, envelopes)?;

            for envelope in state.journal.events_since(expected_version) {
                self.record_event(&envelope.event_data);
            }
        }

        self.metrics
            .update_ledger_size(state.ledger.count_preview(), state.ledger.count_confirmed());

        match error {
            Some(err) => {
                tracing::warn!(
                    command = command.name(),
                    reason = err.reason(),
                    error = %err,
                    "Ledger command rejected"
                );
                self.metrics.record_rejection(command.name(), err.reason());
                Err(err.into())
            }
            None => Ok(version),
        }
    }

    /// Run a read-only query under the ledger lock
    pub async fn query<R>(&self, f: impl FnOnce(&OrderLedger) -> R) -> R {
        let state = self.state.lock().await;
        f(&state.ledger)
    }

    pub async fn totals(&self) -> OrderTotals {
        self.query(OrderLedger::totals).await
    }

    pub async fn events(&self) -> Vec<EventEnvelope<LedgerEvent>> {
        let state = self.state.lock().await;
        state.journal.load_events().to_vec()
    }

    /// Journaled events newer than `version`, oldest first
    pub async fn events_since(&self, version: i64) -> Vec<EventEnvelope<LedgerEvent>> {
        let state = self.state.lock().await;
        state.journal.events_since(version).cloned().collect()
    }

    fn execute(ledger: &mut OrderLedger, command: &LedgerCommand) -> Execution {
        match command {
            LedgerCommand::AddPreview { dimensions, features, sealable_top, count } => {
                if !dimensions.is_valid() {
                    return Execution::failed(OrderError::OutOfRange {
                        length: dimensions.length,
                        height: dimensions.height,
                        width: dimensions.width,
                    });
                }

                let outcome = ledger.add_preview(*dimensions, *features, *sealable_top, *count);
                let (added, error) = match outcome {
                    Ok(added) => (added, None),
                    Err(err) => match err {
                        OrderError::CapacityExceeded { inserted, .. } => (inserted, Some(err)),
                        _ => return Execution::failed(err),
                    },
                };

                let mut execution = Execution { events: Vec::new(), error };
                if added > 0 {
                    match ledger.catalog().type_of(features) {
                        Ok(box_type) => {
                            execution.events.push(LedgerEvent::PreviewAdded(PreviewAdded {
                                box_type,
                                features: *features,
                                sealable_top: *sealable_top,
                                dimensions: *dimensions,
                                count: added,
                            }))
                        }
                        Err(err) => execution.error = Some(err.into()),
                    }
                }
                execution
            }

            LedgerCommand::ClearPreview => match ledger.clear_preview() {
                0 => Execution::default(),
                removed => {
                    Execution::single(LedgerEvent::PreviewCleared(PreviewCleared { removed }))
                }
            },

            LedgerCommand::ClearConfirmed => match ledger.clear_confirmed() {
                0 => Execution::default(),
                removed => {
                    Execution::single(LedgerEvent::ConfirmedCleared(ConfirmedCleared { removed }))
                }
            },

            LedgerCommand::ConfirmAllPreview => match ledger.confirm_all_preview() {
                0 => Execution::default(),
                confirmed => {
                    tracing::info!(confirmed = confirmed, "Preview boxes confirmed");
                    Execution::single(LedgerEvent::PreviewConfirmed(PreviewConfirmed { confirmed }))
                }
            },

            LedgerCommand::DeleteConfirmed { position } => {
                match ledger.delete_confirmed(*position) {
                    Some(deleted) => {
                        let event = ConfirmedBoxDeleted {
                            position: *position,
                            box_id: deleted.id(),
                            box_type: deleted.box_type(),
                        };
                        Execution::single(LedgerEvent::ConfirmedBoxDeleted(event))
                    }
                    None => Execution::default(),
                }
            }
        }
    }

    fn record_event(&self, event: &LedgerEvent) {
        match event {
            LedgerEvent::PreviewAdded(e) => self.metrics.record_added(e.box_type.get(), e.count),
            LedgerEvent::PreviewCleared(e) => self.metrics.record_cleared("preview", e.removed),
            LedgerEvent::ConfirmedCleared(e) => self.metrics.record_cleared("confirmed", e.removed),
            LedgerEvent::PreviewConfirmed(e) => self.metrics.record_confirmed(e.confirmed),
            LedgerEvent::ConfirmedBoxDeleted(_) => self.metrics.record_deleted(),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
