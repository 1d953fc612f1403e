//! Single-warehouse inventory bookkeeping.
//!
//! Receive and release stock, audit counts and report current levels. All of
//! it is in-memory, synchronous domain logic; observability goes through an
//! injectable [`stockkeep_events::EventSink`].

pub mod event;
pub mod manager;
pub mod product;
pub mod receipt;
pub mod report;
pub mod tracing_sink;
pub mod warehouse;

#[cfg(test)]
mod test_support;

pub use event::{
    InsufficientStock, InventoryChecked, InventoryEvent, LookupOperation, ManagerAssigned,
    ProductNotFound, ProductReceived, ProductReleased, ReceiptIssued, StockReportGenerated,
};
pub use manager::{AuditOutcome, Manager};
pub use product::{Product, Quantity};
pub use receipt::{IncomeReceipt, OutcomeReceipt, Receipt, ReceiptKind};
pub use report::{DEFAULT_REPORT_TITLE, ReportPeriod, StockLine, StockReport};
pub use tracing_sink::TracingSink;
pub use warehouse::{ReceiveOutcome, ReleaseOutcome, Warehouse};
