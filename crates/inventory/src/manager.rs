//! Process-facing API: movements, receipts, reports and audits.
//!
//! Manager operations follow a "never fail, always log" policy. Missing
//! products and short releases are published as warning events and otherwise
//! absorbed (no-op or clamping). The `try_*` variants perform the same work but
//! surface those conditions as [`DomainError`]s; that is a deliberate
//! strengthening for callers that need success/failure signaling.

use std::io;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockkeep_core::{DomainError, DomainResult};
use stockkeep_events::EventSink;

use crate::event::{
    InsufficientStock, InventoryChecked, InventoryEvent, LookupOperation, ManagerAssigned,
    ProductNotFound, ProductReceived, ProductReleased, ReceiptIssued, StockReportGenerated,
};
use crate::product::{Product, Quantity};
use crate::receipt::{IncomeReceipt, OutcomeReceipt, ReceiptKind};
use crate::report::{ReportPeriod, StockReport};
use crate::tracing_sink::TracingSink;
use crate::warehouse::{ReleaseOutcome, Warehouse};

/// What `perform_inventory_check` did.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AuditOutcome {
    Adjusted {
        previous: Quantity,
        actual: Quantity,
        difference: i64,
    },
    NotFound,
}

impl AuditOutcome {
    pub fn into_result(self, product: &str) -> DomainResult<i64> {
        match self {
            AuditOutcome::Adjusted { difference, .. } => Ok(difference),
            AuditOutcome::NotFound => Err(DomainError::not_found(product)),
        }
    }
}

/// Orchestrates one warehouse and publishes what happens to `sink`.
#[derive(Debug)]
pub struct Manager<'w, S = TracingSink>
where
    S: EventSink<InventoryEvent>,
{
    name: String,
    warehouse: &'w mut Warehouse,
    sink: S,
}

impl<'w> Manager<'w, TracingSink> {
    /// Manager that logs through `tracing`.
    pub fn new(name: impl Into<String>, warehouse: &'w mut Warehouse) -> Self {
        Self::with_sink(name, warehouse, TracingSink)
    }
}

impl<'w, S> Manager<'w, S>
where
    S: EventSink<InventoryEvent>,
{
    pub fn with_sink(name: impl Into<String>, warehouse: &'w mut Warehouse, sink: S) -> Self {
        let manager = Self {
            name: name.into(),
            warehouse,
            sink,
        };
        manager.publish(InventoryEvent::ManagerAssigned(ManagerAssigned {
            warehouse_id: manager.warehouse.id().clone(),
            manager: manager.name.clone(),
            occurred_at: Utc::now(),
        }));
        manager
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn warehouse(&self) -> &Warehouse {
        &*self.warehouse
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn publish(&self, event: InventoryEvent) {
        self.sink.publish(&event);
    }

    /// Receive `product` from `giver`.
    ///
    /// The receipt carries the quantity as delivered, not the merged total.
    pub fn create_income_receipt(
        &mut self,
        product: Product,
        giver: impl Into<String>,
        date: DateTime<Utc>,
    ) -> IncomeReceipt {
        let receipt = IncomeReceipt::new(product.clone(), giver, date);
        let outcome = self.warehouse.receive_product(product);

        self.publish(InventoryEvent::ProductReceived(ProductReceived {
            warehouse_id: self.warehouse.id().clone(),
            product: receipt.product().name().to_string(),
            quantity: receipt.quantity(),
            total: outcome.total(),
            new_entry: outcome.is_new_entry(),
            occurred_at: date,
        }));
        self.publish_receipt(ReceiptKind::Income, receipt.product(), receipt.giver(), date);
        receipt
    }

    /// Release `product` to `receiver`.
    ///
    /// Always issues a receipt for the requested quantity, even when stock ran
    /// short or the product was unknown.
    pub fn create_outcome_receipt(
        &mut self,
        product: Product,
        receiver: impl Into<String>,
        date: DateTime<Utc>,
    ) -> OutcomeReceipt {
        self.release(product, receiver, date).0
    }

    /// Same as [`Self::create_outcome_receipt`], but reports shortfall and
    /// missing product as errors. Stock is still clamped and the receipt's
    /// events still published before the error is returned.
    pub fn try_create_outcome_receipt(
        &mut self,
        product: Product,
        receiver: impl Into<String>,
        date: DateTime<Utc>,
    ) -> DomainResult<OutcomeReceipt> {
        let (receipt, outcome) = self.release(product, receiver, date);
        outcome.into_result(receipt.product().name())?;
        Ok(receipt)
    }

    fn release(
        &mut self,
        product: Product,
        receiver: impl Into<String>,
        date: DateTime<Utc>,
    ) -> (OutcomeReceipt, ReleaseOutcome) {
        let outcome = self.warehouse.release_product(&product);
        let warehouse_id = self.warehouse.id().clone();
        let name = product.name().to_string();

        match outcome {
            ReleaseOutcome::Released { requested, remaining } => {
                self.publish(InventoryEvent::ProductReleased(ProductReleased {
                    warehouse_id,
                    product: name,
                    requested,
                    remaining,
                    occurred_at: date,
                }));
            }
            ReleaseOutcome::Shortfall { requested, available } => {
                self.publish(InventoryEvent::InsufficientStock(InsufficientStock {
                    warehouse_id: warehouse_id.clone(),
                    product: name.clone(),
                    requested,
                    available,
                    occurred_at: date,
                }));
                self.publish(InventoryEvent::ProductReleased(ProductReleased {
                    warehouse_id,
                    product: name,
                    requested,
                    remaining: 0,
                    occurred_at: date,
                }));
            }
            ReleaseOutcome::NotFound => {
                self.publish(InventoryEvent::ProductNotFound(ProductNotFound {
                    warehouse_id,
                    product: name,
                    operation: LookupOperation::Release,
                    occurred_at: date,
                }));
            }
        }

        let receipt = OutcomeReceipt::new(product, receiver, date);
        self.publish_receipt(ReceiptKind::Outcome, receipt.product(), receipt.receiver(), date);
        (receipt, outcome)
    }

    fn publish_receipt(
        &self,
        kind: ReceiptKind,
        product: &Product,
        counterparty: &str,
        date: DateTime<Utc>,
    ) {
        self.publish(InventoryEvent::ReceiptIssued(ReceiptIssued {
            warehouse_id: self.warehouse.id().clone(),
            kind,
            product: product.name().to_string(),
            quantity: product.quantity(),
            counterparty: counterparty.to_string(),
            occurred_at: date,
        }));
    }

    /// Current stock, one line per entry in arrival order.
    ///
    /// `start`/`end` label the report; they do not filter it. Receipts are not
    /// retained, so there is no movement history to filter by.
    pub fn generate_stock_report(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> StockReport {
        let report = StockReport::new(
            self.warehouse.id().clone(),
            ReportPeriod { start, end },
            self.warehouse.inventory(),
        );
        self.publish(InventoryEvent::StockReportGenerated(StockReportGenerated {
            warehouse_id: self.warehouse.id().clone(),
            period_start: start,
            period_end: end,
            lines: report.lines().len(),
            occurred_at: Utc::now(),
        }));
        report
    }

    /// Generate the report and render it to `out`.
    pub fn write_stock_report<W: io::Write>(
        &self,
        out: &mut W,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> io::Result<StockReport> {
        let report = self.generate_stock_report(start, end);
        write!(out, "{report}")?;
        out.flush()?;
        Ok(report)
    }

    /// Overwrite the named entry's quantity with a physical count.
    ///
    /// Only `product`'s name is used. No clamping: the count is taken as-is.
    pub fn perform_inventory_check(
        &mut self,
        product: &Product,
        actual_quantity: Quantity,
        date: DateTime<Utc>,
    ) -> AuditOutcome {
        let warehouse_id = self.warehouse.id().clone();
        let Some(entry) = self.warehouse.product_mut(product.name()) else {
            self.publish(InventoryEvent::ProductNotFound(ProductNotFound {
                warehouse_id,
                product: product.name().to_string(),
                operation: LookupOperation::InventoryCheck,
                occurred_at: date,
            }));
            return AuditOutcome::NotFound;
        };

        let previous = entry.quantity();
        let difference = i64::from(actual_quantity) - i64::from(previous);
        entry.set_quantity(actual_quantity);

        self.publish(InventoryEvent::InventoryChecked(InventoryChecked {
            warehouse_id,
            product: product.name().to_string(),
            previous,
            actual: actual_quantity,
            difference,
            occurred_at: date,
        }));
        AuditOutcome::Adjusted {
            previous,
            actual: actual_quantity,
            difference,
        }
    }

    /// Same as [`Self::perform_inventory_check`], returning the surplus (or
    /// negative shortage) and `NotFound` as an error.
    pub fn try_perform_inventory_check(
        &mut self,
        product: &Product,
        actual_quantity: Quantity,
        date: DateTime<Utc>,
    ) -> DomainResult<i64> {
        self.perform_inventory_check(product, actual_quantity, date)
            .into_result(product.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use stockkeep_events::{Event, RecordingSink, Severity};

    fn test_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, 8, 30, 0).unwrap()
    }

    fn event_types(sink: &RecordingSink<InventoryEvent>) -> Vec<&'static str> {
        sink.events().iter().map(|e| e.event_type()).collect()
    }

    #[test]
    fn construction_publishes_manager_assigned() {
        let mut wh = Warehouse::new("WH01");
        let sink = RecordingSink::new();
        let manager = Manager::with_sink("Bat", &mut wh, &sink);

        assert_eq!(manager.name(), "Bat");
        assert_eq!(event_types(&sink), vec!["inventory.manager.assigned"]);
    }

    #[test]
    fn income_receipt_keeps_delivered_quantity_not_merged_total() {
        let mut wh = Warehouse::new("WH01");
        let sink = RecordingSink::new();
        let mut manager = Manager::with_sink("Bat", &mut wh, &sink);

        manager.create_income_receipt(Product::new("Rice", 100), "Supplier A", test_time());
        let receipt =
            manager.create_income_receipt(Product::new("Rice", 20), "Supplier A", test_time());

        assert_eq!(receipt.quantity(), 20);
        assert_eq!(receipt.giver(), "Supplier A");
        assert_eq!(receipt.date(), test_time());
        assert_eq!(manager.warehouse().get("Rice").map(Product::quantity), Some(120));

        match &sink.events()[3] {
            InventoryEvent::ProductReceived(e) => {
                assert_eq!(e.quantity, 20);
                assert_eq!(e.total, 120);
                assert!(!e.new_entry);
            }
            other => panic!("expected ProductReceived, got {other:?}"),
        }
    }

    #[test]
    fn outcome_receipt_carries_requested_quantity_on_shortfall() {
        let mut wh = Warehouse::new("WH01");
        let sink = RecordingSink::new();
        let mut manager = Manager::with_sink("Bat", &mut wh, &sink);
        manager.create_income_receipt(Product::new("Rice", 120), "A", test_time());
        sink.clear();

        let receipt =
            manager.create_outcome_receipt(Product::new("Rice", 150), "Customer C", test_time());

        assert_eq!(receipt.quantity(), 150);
        assert_eq!(receipt.receiver(), "Customer C");
        assert_eq!(manager.warehouse().get("Rice").map(Product::quantity), Some(0));
        assert_eq!(
            event_types(&sink),
            vec![
                "inventory.product.insufficient_stock",
                "inventory.product.released",
                "inventory.receipt.issued",
            ]
        );
        assert_eq!(sink.events()[0].severity(), Severity::Warn);
    }

    #[test]
    fn outcome_receipt_for_unknown_product_warns_and_changes_nothing() {
        let mut wh = Warehouse::new("WH01");
        let sink = RecordingSink::new();
        let mut manager = Manager::with_sink("Bat", &mut wh, &sink);
        sink.clear();

        let receipt = manager.create_outcome_receipt(Product::new("Flour", 10), "C", test_time());

        assert_eq!(receipt.quantity(), 10);
        assert!(manager.warehouse().is_empty());
        match &sink.events()[0] {
            InventoryEvent::ProductNotFound(e) => {
                assert_eq!(e.product, "Flour");
                assert_eq!(e.operation, LookupOperation::Release);
            }
            other => panic!("expected ProductNotFound, got {other:?}"),
        }
    }

    #[test]
    fn strict_release_reports_shortfall_after_clamping() {
        let mut wh = Warehouse::new("WH01");
        let mut manager = Manager::with_sink("Bat", &mut wh, stockkeep_events::NoopSink);
        manager.create_income_receipt(Product::new("Rice", 5), "A", test_time());

        let err = manager
            .try_create_outcome_receipt(Product::new("Rice", 8), "C", test_time())
            .unwrap_err();

        assert_eq!(err, DomainError::insufficient_stock("Rice", 8, 5));
        assert_eq!(manager.warehouse().get("Rice").map(Product::quantity), Some(0));
    }

    #[test]
    fn strict_release_succeeds_when_stock_suffices() {
        let mut wh = Warehouse::new("WH01");
        let mut manager = Manager::with_sink("Bat", &mut wh, stockkeep_events::NoopSink);
        manager.create_income_receipt(Product::new("Rice", 5), "A", test_time());

        let receipt = manager
            .try_create_outcome_receipt(Product::new("Rice", 5), "C", test_time())
            .unwrap();
        assert_eq!(receipt.quantity(), 5);
    }

    #[test]
    fn inventory_check_overwrites_and_reports_difference() {
        let mut wh = Warehouse::new("WH01");
        let sink = RecordingSink::new();
        let mut manager = Manager::with_sink("Bat", &mut wh, &sink);
        manager.create_income_receipt(Product::new("Rice", 70), "A", test_time());
        sink.clear();

        let outcome = manager.perform_inventory_check(&Product::new("Rice", 0), 65, test_time());

        assert_eq!(
            outcome,
            AuditOutcome::Adjusted {
                previous: 70,
                actual: 65,
                difference: -5
            }
        );
        assert_eq!(manager.warehouse().get("Rice").map(Product::quantity), Some(65));
        assert_eq!(event_types(&sink), vec!["inventory.product.checked"]);
    }

    #[test]
    fn inventory_check_can_raise_stock() {
        let mut wh = Warehouse::new("WH01");
        let mut manager = Manager::with_sink("Bat", &mut wh, stockkeep_events::NoopSink);
        manager.create_income_receipt(Product::new("Rice", 0), "A", test_time());

        let surplus = manager
            .try_perform_inventory_check(&Product::new("Rice", 0), 12, test_time())
            .unwrap();
        assert_eq!(surplus, 12);
    }

    #[test]
    fn inventory_check_of_unknown_product_is_a_warning_no_op() {
        let mut wh = Warehouse::new("WH01");
        let sink = RecordingSink::new();
        let mut manager = Manager::with_sink("Bat", &mut wh, &sink);
        sink.clear();

        let outcome = manager.perform_inventory_check(&Product::new("Salt", 0), 3, test_time());

        assert_eq!(outcome, AuditOutcome::NotFound);
        assert!(manager.warehouse().is_empty());
        assert!(sink.events()[0].is_warning());
        assert_eq!(
            manager.try_perform_inventory_check(&Product::new("Salt", 0), 3, test_time()),
            Err(DomainError::not_found("Salt"))
        );
    }

    #[test]
    fn report_ignores_date_range() {
        let mut wh = Warehouse::new("WH01");
        let mut manager = Manager::with_sink("Bat", &mut wh, stockkeep_events::NoopSink);
        manager.create_income_receipt(Product::new("Rice", 100), "A", test_time());

        let long_ago = Utc.with_ymd_and_hms(1999, 1, 1, 0, 0, 0).unwrap();
        let report = manager.generate_stock_report(long_ago, long_ago);

        assert_eq!(report.lines().len(), 1);
        assert_eq!(report.period().start, long_ago);
    }

    #[test]
    fn write_stock_report_renders_to_writer() {
        let mut wh = Warehouse::new("WH01");
        let mut manager = Manager::with_sink("Bat", &mut wh, stockkeep_events::NoopSink);
        manager.create_income_receipt(Product::new("Rice", 70), "A", test_time());
        manager.create_income_receipt(Product::new("Flour", 50), "B", test_time());

        let mut out = Vec::new();
        manager
            .write_stock_report(&mut out, test_time(), test_time())
            .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "=== Stock Report ===\nRice: 70\nFlour: 50\n");
    }
}
