//! `stockkeep-core`: domain building blocks shared by the inventory crates.
//!
//! This crate contains **pure domain** primitives (no IO, no logging setup).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::WarehouseId;
pub use value_object::ValueObject;
