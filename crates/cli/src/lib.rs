//! Demonstration driver for the inventory library.

pub mod config;
pub mod demo;

pub use config::{ConfigError, DemoConfig};
pub use demo::run;
