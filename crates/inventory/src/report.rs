//! Plain-text stock report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockkeep_core::{ValueObject, WarehouseId};

use crate::product::{Product, Quantity};

pub const DEFAULT_REPORT_TITLE: &str = "Stock Report";

/// Period a report was requested for.
///
/// Label only: lines always reflect current stock, whatever the period.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPeriod {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLine {
    pub name: String,
    pub quantity: Quantity,
}

impl ValueObject for StockLine {}

impl From<&Product> for StockLine {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name().to_string(),
            quantity: product.quantity(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockReport {
    title: String,
    warehouse_id: WarehouseId,
    period: ReportPeriod,
    lines: Vec<StockLine>,
}

impl StockReport {
    pub fn new(warehouse_id: WarehouseId, period: ReportPeriod, inventory: &[Product]) -> Self {
        Self {
            title: DEFAULT_REPORT_TITLE.to_string(),
            warehouse_id,
            period,
            lines: inventory.iter().map(StockLine::from).collect(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn warehouse_id(&self) -> &WarehouseId {
        &self.warehouse_id
    }

    pub fn period(&self) -> ReportPeriod {
        self.period
    }

    pub fn lines(&self) -> &[StockLine] {
        &self.lines
    }

    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }
}

impl core::fmt::Display for StockReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "=== {} ===", self.title)?;
        for line in &self.lines {
            writeln!(f, "{}: {}", line.name, line.quantity)?;
        }
        Ok(())
    }
}
