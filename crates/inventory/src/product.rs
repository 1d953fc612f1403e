use serde::{Deserialize, Serialize};

use stockkeep_core::Entity;

/// Unit count held in stock. Unsigned, so stock can never go negative.
pub type Quantity = u32;

/// A named, mutable quantity record.
///
/// Identity is the name (case-sensitive, exact match). The name is fixed at
/// construction; only the quantity moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    quantity: Quantity,
}

impl Product {
    pub fn new(name: impl Into<String>, quantity: Quantity) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn set_quantity(&mut self, quantity: Quantity) {
        self.quantity = quantity;
    }

    pub(crate) fn matches(&self, name: &str) -> bool {
        self.name == name
    }
}

impl Entity for Product {
    type Id = str;

    fn id(&self) -> &str {
        &self.name
    }
}
