use prometheus::{Encoder, IntCounter, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};

// ============================================================================
// Metrics Module - Prometheus metrics for the order ledger
// ============================================================================
//
// Tracks:
// - Boxes added per box type, confirmed, deleted and cleared
// - Commands rejected, by reason
// - Current size of the preview and confirmed subsets
//
// No HTTP exposition: `render()` returns the text format for the caller.
// ============================================================================

pub struct Metrics {
    registry: Registry,

    // Ledger Mutation Metrics
    pub boxes_added: IntCounterVec,
    pub boxes_confirmed: IntCounter,
    pub boxes_deleted: IntCounter,
    pub boxes_cleared: IntCounterVec,

    // Rejection Metrics
    pub commands_rejected: IntCounterVec,

    // Ledger Size Gauges
    pub preview_boxes: IntGauge,
    pub confirmed_boxes: IntGauge,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let boxes_added = IntCounterVec::new(
            Opts::new("ledger_boxes_added_total", "Total preview boxes added"),
            &["box_type"],
        )?;
        registry.register(Box::new(boxes_added.clone()))?;

        let boxes_confirmed = IntCounter::new(
            "ledger_boxes_confirmed_total",
            "Total preview boxes confirmed",
        )?;
        registry.register(Box::new(boxes_confirmed.clone()))?;

        let boxes_deleted = IntCounter::new(
            "ledger_boxes_deleted_total",
            "Total confirmed boxes deleted one by one",
        )?;
        registry.register(Box::new(boxes_deleted.clone()))?;

        let boxes_cleared = IntCounterVec::new(
            Opts::new("ledger_boxes_cleared_total", "Total boxes removed by a clear"),
            &["subset"],
        )?;
        registry.register(Box::new(boxes_cleared.clone()))?;

        let commands_rejected = IntCounterVec::new(
            Opts::new("ledger_commands_rejected_total", "Total commands rejected"),
            &["command", "reason"],
        )?;
        registry.register(Box::new(commands_rejected.clone()))?;

        let preview_boxes = IntGauge::new("ledger_preview_boxes", "Boxes awaiting confirmation")?;
        registry.register(Box::new(preview_boxes.clone()))?;

        let confirmed_boxes =
            IntGauge::new("ledger_confirmed_boxes", "Boxes in the confirmed order")?;
        registry.register(Box::new(confirmed_boxes.clone()))?;

        Ok(Self {
            registry,
            boxes_added,
            boxes_confirmed,
            boxes_deleted,
            boxes_cleared,
            commands_rejected,
            preview_boxes,
            confirmed_boxes,
        })
    }

    pub fn record_added(&self, box_type: u8, count: usize) {
        let label = box_type.to_string();
        self.boxes_added
            .with_label_values(&[label.as_str()])
            .inc_by(count as u64);
    }

    pub fn record_confirmed(&self, count: usize) {
        self.boxes_confirmed.inc_by(count as u64);
    }

    pub fn record_deleted(&self) {
        self.boxes_deleted.inc();
    }

    pub fn record_cleared(&self, subset: &str, count: usize) {
        self.boxes_cleared.with_label_values(&[subset]).inc_by(count as u64);
    }

    pub fn record_rejection(&self, command: &str, reason: &str) {
        self.commands_rejected.with_label_values(&[command, reason]).inc();
    }

    pub fn update_ledger_size(&self, preview: usize, confirmed: usize) {
        self.preview_boxes.set(preview as i64);
        self.confirmed_boxes.set(confirmed as i64);
    }

    /// Prometheus text exposition of every registered metric
    pub fn render(&self) -> anyhow::Result<String> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new().expect("Failed to create metrics")
    }
}
