//! Inventory container keyed by product name.
//!
//! The warehouse never fails: every call reports what it did through an
//! outcome value, and degraded outcomes (shortfall, unknown product) are data,
//! not errors. Use `into_result()` on an outcome to opt into strict handling.

use serde::{Deserialize, Serialize};

use stockkeep_core::{DomainError, DomainResult, WarehouseId};

use crate::product::{Product, Quantity};

/// What `receive_product` did.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ReceiveOutcome {
    /// A new entry was appended.
    Added { quantity: Quantity },
    /// The quantity was added to an existing same-named entry.
    Merged { received: Quantity, total: Quantity },
}

impl ReceiveOutcome {
    /// Quantity held after the receive.
    pub fn total(&self) -> Quantity {
        match *self {
            ReceiveOutcome::Added { quantity } => quantity,
            ReceiveOutcome::Merged { total, .. } => total,
        }
    }

    pub fn is_new_entry(&self) -> bool {
        matches!(self, ReceiveOutcome::Added { .. })
    }
}

/// What `release_product` did.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ReleaseOutcome {
    Released { requested: Quantity, remaining: Quantity },
    /// Requested more than `available`; stock was clamped to zero.
    Shortfall { requested: Quantity, available: Quantity },
    NotFound,
}

impl ReleaseOutcome {
    /// Quantity left on the entry, `None` if there was no entry.
    pub fn remaining(&self) -> Option<Quantity> {
        match *self {
            ReleaseOutcome::Released { remaining, .. } => Some(remaining),
            ReleaseOutcome::Shortfall { .. } => Some(0),
            ReleaseOutcome::NotFound => None,
        }
    }

    pub fn is_fully_honored(&self) -> bool {
        matches!(self, ReleaseOutcome::Released { .. })
    }

    /// Strict view: shortfall and missing product become errors.
    ///
    /// The mutation has already happened by the time this is called; the
    /// error only reports it.
    pub fn into_result(self, product: &str) -> DomainResult<Quantity> {
        match self {
            ReleaseOutcome::Released { remaining, .. } => Ok(remaining),
            ReleaseOutcome::Shortfall { requested, available } => {
                Err(DomainError::insufficient_stock(product, requested, available))
            }
            ReleaseOutcome::NotFound => Err(DomainError::not_found(product)),
        }
    }
}

/// A single warehouse's inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warehouse {
    id: WarehouseId,
    inventory: Vec<Product>,
}

impl Warehouse {
    pub fn new(id: impl Into<WarehouseId>) -> Self {
        let id = id.into();
        tracing::info!(warehouse_id = %id, "warehouse created");
        Self {
            id,
            inventory: Vec::new(),
        }
    }

    pub fn id(&self) -> &WarehouseId {
        &self.id
    }

    pub fn len(&self) -> usize {
        self.inventory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inventory.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Product> {
        self.inventory.iter().find(|p| p.matches(name))
    }

    /// Mutable handle to one entry.
    ///
    /// Only the quantity can change through it, so names stay unique.
    pub fn product_mut(&mut self, name: &str) -> Option<&mut Product> {
        self.inventory.iter_mut().find(|p| p.matches(name))
    }

    /// Live inventory, in arrival order.
    pub fn inventory(&self) -> &[Product] {
        &self.inventory
    }

    /// Owned copy of the inventory.
    pub fn snapshot(&self) -> Vec<Product> {
        self.inventory.clone()
    }

    /// Merge into an existing same-named entry, or adopt `product` as a new one.
    pub fn receive_product(&mut self, product: Product) -> ReceiveOutcome {
        if let Some(existing) = self.inventory.iter_mut().find(|p| p.matches(product.name())) {
            let received = product.quantity();
            let total = existing.quantity().saturating_add(received);
            existing.set_quantity(total);
            tracing::info!(
                warehouse_id = %self.id,
                product = existing.name(),
                received,
                total,
                "merged into existing entry"
            );
            return ReceiveOutcome::Merged { received, total };
        }

        let quantity = product.quantity();
        tracing::info!(
            warehouse_id = %self.id,
            product = product.name(),
            quantity,
            "added new entry"
        );
        self.inventory.push(product);
        ReceiveOutcome::Added { quantity }
    }

    /// Take `product.quantity()` units of the named entry, clamping at zero.
    pub fn release_product(&mut self, product: &Product) -> ReleaseOutcome {
        let Some(existing) = self.inventory.iter_mut().find(|p| p.matches(product.name())) else {
            tracing::warn!(
                warehouse_id = %self.id,
                product = product.name(),
                "product to release not found"
            );
            return ReleaseOutcome::NotFound;
        };

        let requested = product.quantity();
        let available = existing.quantity();
        if requested > available {
            tracing::warn!(
                warehouse_id = %self.id,
                product = existing.name(),
                requested,
                available,
                "insufficient stock, clamping to zero"
            );
        }
        existing.set_quantity(available.saturating_sub(requested));
        tracing::info!(
            warehouse_id = %self.id,
            product = existing.name(),
            requested,
            remaining = existing.quantity(),
            "released"
        );

        if requested > available {
            ReleaseOutcome::Shortfall { requested, available }
        } else {
            ReleaseOutcome::Released {
                requested,
                remaining: available - requested,
            }
        }
    }
}
