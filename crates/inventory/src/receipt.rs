//! Immutable stock movement records.
//!
//! Receipts are handed back to the caller. Nothing in this crate stores them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockkeep_core::ValueObject;

use crate::product::{Product, Quantity};

/// Direction of a stock movement.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReceiptKind {
    Income,
    Outcome,
}

impl core::fmt::Display for ReceiptKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ReceiptKind::Income => f.write_str("income"),
            ReceiptKind::Outcome => f.write_str("outcome"),
        }
    }
}

/// Goods received from a giver (supplier).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeReceipt {
    product: Product,
    giver: String,
    date: DateTime<Utc>,
}

impl IncomeReceipt {
    pub fn new(product: Product, giver: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            product,
            giver: giver.into(),
            date,
        }
    }

    /// Product snapshot as it was handed in (unmerged quantity).
    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> Quantity {
        self.product.quantity()
    }

    pub fn giver(&self) -> &str {
        &self.giver
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }
}

impl ValueObject for IncomeReceipt {}

/// Goods released to a receiver (customer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeReceipt {
    product: Product,
    receiver: String,
    date: DateTime<Utc>,
}

impl OutcomeReceipt {
    pub fn new(product: Product, receiver: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            product,
            receiver: receiver.into(),
            date,
        }
    }

    /// Product snapshot with the requested quantity, even when the release was clamped.
    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> Quantity {
        self.product.quantity()
    }

    pub fn receiver(&self) -> &str {
        &self.receiver
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }
}

impl ValueObject for OutcomeReceipt {}

/// Either kind of receipt, for callers that keep their own movement history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Receipt {
    Income(IncomeReceipt),
    Outcome(OutcomeReceipt),
}

impl Receipt {
    pub fn kind(&self) -> ReceiptKind {
        match self {
            Receipt::Income(_) => ReceiptKind::Income,
            Receipt::Outcome(_) => ReceiptKind::Outcome,
        }
    }

    pub fn product(&self) -> &Product {
        match self {
            Receipt::Income(r) => r.product(),
            Receipt::Outcome(r) => r.product(),
        }
    }

    /// Giver for income, receiver for outcome.
    pub fn counterparty(&self) -> &str {
        match self {
            Receipt::Income(r) => r.giver(),
            Receipt::Outcome(r) => r.receiver(),
        }
    }

    pub fn date(&self) -> DateTime<Utc> {
        match self {
            Receipt::Income(r) => r.date(),
            Receipt::Outcome(r) => r.date(),
        }
    }
}

impl ValueObject for Receipt {}

impl From<IncomeReceipt> for Receipt {
    fn from(value: IncomeReceipt) -> Self {
        Receipt::Income(value)
    }
}

impl From<OutcomeReceipt> for Receipt {
    fn from(value: OutcomeReceipt) -> Self {
        Receipt::Outcome(value)
    }
}
