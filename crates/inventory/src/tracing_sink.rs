//! Sink that turns inventory events into structured log lines.

use stockkeep_events::{Event, EventSink, Severity};

use crate::event::{InventoryEvent, LookupOperation};

/// Logs every event through `tracing` at the event's severity.
///
/// Each line carries `event_type`, `schema_version`, `warehouse_id`,
/// `occurred_at` and the event serialized as JSON in `event`.
#[derive(Debug, Default, Copy, Clone)]
pub struct TracingSink;

impl EventSink<InventoryEvent> for TracingSink {
    fn publish(&self, event: &InventoryEvent) {
        let payload = match serde_json::to_string(event) {
            Ok(json) => json,
            Err(e) => format!("<unserializable: {e}>"),
        };
        let event_type = event.event_type();
        let schema_version = event.version();
        let warehouse_id = event.warehouse_id().as_str();
        let occurred_at = event.occurred_at().to_rfc3339();
        let message = summary(event);

        match event.severity() {
            Severity::Debug => tracing::debug!(
                event_type,
                schema_version,
                warehouse_id,
                occurred_at = occurred_at.as_str(),
                event = %payload,
                "{message}"
            ),
            Severity::Info => tracing::info!(
                event_type,
                schema_version,
                warehouse_id,
                occurred_at = occurred_at.as_str(),
                event = %payload,
                "{message}"
            ),
            Severity::Warn => tracing::warn!(
                event_type,
                schema_version,
                warehouse_id,
                occurred_at = occurred_at.as_str(),
                event = %payload,
                "{message}"
            ),
        }
    }
}

/// One human-readable sentence per event.
pub fn summary(event: &InventoryEvent) -> String {
    match event {
        InventoryEvent::ManagerAssigned(e) => format!("manager assigned: {}", e.manager),
        InventoryEvent::ProductReceived(e) if e.new_entry => {
            format!("new product stocked: {}, quantity: {}", e.product, e.quantity)
        }
        InventoryEvent::ProductReceived(e) => {
            format!("{} received: {}, on hand: {}", e.product, e.quantity, e.total)
        }
        InventoryEvent::ProductReleased(e) => format!(
            "released {}: {}, remaining: {}",
            e.product, e.requested, e.remaining
        ),
        InventoryEvent::InsufficientStock(e) => format!(
            "insufficient stock for {}: requested={}, available={}",
            e.product, e.requested, e.available
        ),
        InventoryEvent::ProductNotFound(e) => match e.operation {
            LookupOperation::Release => format!("product to release not found: {}", e.product),
            LookupOperation::InventoryCheck => {
                format!("product to check not found: {}", e.product)
            }
        },
        InventoryEvent::InventoryChecked(e) => format!(
            "inventory check: {}, surplus/shortage: {}",
            e.product, e.difference
        ),
        InventoryEvent::ReceiptIssued(e) => format!(
            "{} receipt issued - {}: {} units, counterparty: {}",
            e.kind, e.product, e.quantity, e.counterparty
        ),
        InventoryEvent::StockReportGenerated(e) => format!(
            "stock report: {} - {} ({} lines)",
            e.period_start, e.period_end, e.lines
        ),
    }
}
