use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockkeep_core::WarehouseId;
use stockkeep_events::{Event, Severity};

use crate::product::Quantity;
use crate::receipt::ReceiptKind;

/// Operation that looked a product up and came back empty-handed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupOperation {
    Release,
    InventoryCheck,
}

/// Event: ManagerAssigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagerAssigned {
    pub warehouse_id: WarehouseId,
    pub manager: String,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ProductReceived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductReceived {
    pub warehouse_id: WarehouseId,
    pub product: String,
    pub quantity: Quantity,
    /// Quantity on hand after the receive.
    pub total: Quantity,
    pub new_entry: bool,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ProductReleased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductReleased {
    pub warehouse_id: WarehouseId,
    pub product: String,
    pub requested: Quantity,
    pub remaining: Quantity,
    pub occurred_at: DateTime<Utc>,
}

/// Event: InsufficientStock (release clamped to zero).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsufficientStock {
    pub warehouse_id: WarehouseId,
    pub product: String,
    pub requested: Quantity,
    pub available: Quantity,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ProductNotFound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductNotFound {
    pub warehouse_id: WarehouseId,
    pub product: String,
    pub operation: LookupOperation,
    pub occurred_at: DateTime<Utc>,
}

/// Event: InventoryChecked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryChecked {
    pub warehouse_id: WarehouseId,
    pub product: String,
    pub previous: Quantity,
    pub actual: Quantity,
    /// `actual - previous`; positive means surplus, negative means shortage.
    pub difference: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ReceiptIssued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptIssued {
    pub warehouse_id: WarehouseId,
    pub kind: ReceiptKind,
    pub product: String,
    pub quantity: Quantity,
    pub counterparty: String,
    pub occurred_at: DateTime<Utc>,
}

/// Event: StockReportGenerated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockReportGenerated {
    pub warehouse_id: WarehouseId,
    pub period_start: DateTime<Utc>,
    pub period_end: DateTime<Utc>,
    pub lines: usize,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InventoryEvent {
    ManagerAssigned(ManagerAssigned),
    ProductReceived(ProductReceived),
    ProductReleased(ProductReleased),
    InsufficientStock(InsufficientStock),
    ProductNotFound(ProductNotFound),
    InventoryChecked(InventoryChecked),
    ReceiptIssued(ReceiptIssued),
    StockReportGenerated(StockReportGenerated),
}

impl Event for InventoryEvent {
    fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::ManagerAssigned(_) => "inventory.manager.assigned",
            InventoryEvent::ProductReceived(_) => "inventory.product.received",
            InventoryEvent::ProductReleased(_) => "inventory.product.released",
            InventoryEvent::InsufficientStock(_) => "inventory.product.insufficient_stock",
            InventoryEvent::ProductNotFound(_) => "inventory.product.not_found",
            InventoryEvent::InventoryChecked(_) => "inventory.product.checked",
            InventoryEvent::ReceiptIssued(_) => "inventory.receipt.issued",
            InventoryEvent::StockReportGenerated(_) => "inventory.report.generated",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            InventoryEvent::ManagerAssigned(e) => e.occurred_at,
            InventoryEvent::ProductReceived(e) => e.occurred_at,
            InventoryEvent::ProductReleased(e) => e.occurred_at,
            InventoryEvent::InsufficientStock(e) => e.occurred_at,
            InventoryEvent::ProductNotFound(e) => e.occurred_at,
            InventoryEvent::InventoryChecked(e) => e.occurred_at,
            InventoryEvent::ReceiptIssued(e) => e.occurred_at,
            InventoryEvent::StockReportGenerated(e) => e.occurred_at,
        }
    }

    fn severity(&self) -> Severity {
        match self {
            InventoryEvent::InsufficientStock(_) | InventoryEvent::ProductNotFound(_) => {
                Severity::Warn
            }
            InventoryEvent::StockReportGenerated(_) => Severity::Debug,
            _ => Severity::Info,
        }
    }
}

impl InventoryEvent {
    pub fn warehouse_id(&self) -> &WarehouseId {
        match self {
            InventoryEvent::ManagerAssigned(e) => &e.warehouse_id,
            InventoryEvent::ProductReceived(e) => &e.warehouse_id,
            InventoryEvent::ProductReleased(e) => &e.warehouse_id,
            InventoryEvent::InsufficientStock(e) => &e.warehouse_id,
            InventoryEvent::ProductNotFound(e) => &e.warehouse_id,
            InventoryEvent::InventoryChecked(e) => &e.warehouse_id,
            InventoryEvent::ReceiptIssued(e) => &e.warehouse_id,
            InventoryEvent::StockReportGenerated(e) => &e.warehouse_id,
        }
    }

    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warn
    }
}
