use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use uuid::Uuid;

use flexbox_orders::domain::catalog::FeatureSet;
use flexbox_orders::domain::order::{LedgerCommand, LedgerCommandHandler, LedgerConfig, OrderError};
use flexbox_orders::domain::shape::Dimensions;
use flexbox_orders::metrics::Metrics;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Structured logging, INFO by default; override with RUST_LOG
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,flexbox_orders=debug"))
        )
        .init();

    tracing::info!("Starting box ordering walkthrough");

    let metrics = Arc::new(Metrics::new()?);
    let handler = LedgerCommandHandler::new(LedgerConfig::default(), metrics.clone());
    let session = Uuid::new_v4();
    tracing::info!(stream_id = %handler.stream_id().await, %session, "Order ledger opened");

    // === 1. Preview a batch of reinforced, sealable boxes ===
    let features = FeatureSet::new(3, 2, true, false);
    let can_be_made = handler
        .query(|ledger| ledger.is_box_can_be_made(3, 2, true, false))
        .await;
    tracing::info!(%features, can_be_made, "Checked feature set against catalog");

    let (box_type, combinations) = handler
        .query(|ledger| {
            let catalog = ledger.catalog();
            catalog
                .type_of(&features)
                .map(|box_type| (box_type, catalog.feature_sets_of(box_type).count()))
        })
        .await?;
    tracing::info!(%box_type, combinations, "Box type resolved");

    let preview_version = handler
        .handle(
            LedgerCommand::AddPreview {
                dimensions: Dimensions::new(2.0, 2.0, 2.0),
                features,
                sealable_top: true,
                count: 3,
            },
            session,
        )
        .await?;

    let (size, feature_info, price) = handler
        .query(|ledger| {
            (
                ledger.last_preview_size_info(),
                ledger.last_preview_feature_info(),
                ledger.last_preview_price_info(),
            )
        })
        .await;
    tracing::info!("Last preview box:\n{}\n{}\n{}", feature_info, size, price);

    // === 2. A combination the catalog does not know is rejected ===
    let rejected = handler
        .handle(
            LedgerCommand::AddPreview {
                dimensions: Dimensions::new(1.0, 1.0, 1.0),
                features: FeatureSet::new(1, 2, false, false),
                sealable_top: false,
                count: 1,
            },
            session,
        )
        .await;
    if let Err(err) = rejected {
        match err.downcast_ref::<OrderError>() {
            Some(order_error) => {
                tracing::info!(reason = order_error.reason(), "Rejected as expected")
            }
            None => return Err(err),
        }
    }

    // === 3. Confirm, then drop one confirmed box ===
    handler.handle(LedgerCommand::ConfirmAllPreview, session).await?;
    handler.handle(LedgerCommand::DeleteConfirmed { position: 2 }, session).await?;

    let totals = handler.totals().await;
    tracing::info!("Order totals:\n{}", totals);
    tracing::info!("Order totals as JSON: {}", serde_json::to_string(&totals)?);

    for envelope in handler.events().await {
        tracing::debug!(
            sequence = envelope.sequence_number,
            event_type = %envelope.event_type,
            "Journaled event"
        );
    }
    for envelope in handler.events_since(preview_version).await {
        tracing::debug!("Recorded after preview: {}", envelope.to_json()?);
    }

    tracing::debug!("Metrics:\n{}", metrics.render()?);
    tracing::info!("Walkthrough complete");

    Ok(())
}
