//! Environment-driven configuration for the `stockkeep` binary.

use stockkeep_core::{DomainError, WarehouseId};
use stockkeep_observability::{LogFormat, ParseLogFormatError};
use thiserror::Error;

pub const ENV_WAREHOUSE_ID: &str = "STOCKKEEP_WAREHOUSE_ID";
pub const ENV_MANAGER: &str = "STOCKKEEP_MANAGER";
pub const ENV_LOG_FORMAT: &str = "STOCKKEEP_LOG_FORMAT";

const DEFAULT_WAREHOUSE_ID: &str = "WH01";
const DEFAULT_MANAGER: &str = "Storekeeper Bat";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("STOCKKEEP_WAREHOUSE_ID: {0}")]
    WarehouseId(#[source] DomainError),

    #[error("STOCKKEEP_LOG_FORMAT: {0}")]
    LogFormat(#[source] ParseLogFormatError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub warehouse_id: WarehouseId,
    pub manager: String,
    pub log_format: LogFormat,
}

impl DemoConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let warehouse_id = lookup(ENV_WAREHOUSE_ID)
            .unwrap_or_else(|| DEFAULT_WAREHOUSE_ID.to_string())
            .parse::<WarehouseId>()
            .map_err(ConfigError::WarehouseId)?;

        let manager = lookup(ENV_MANAGER)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MANAGER.to_string());

        let log_format = match lookup(ENV_LOG_FORMAT) {
            Some(raw) => raw.parse::<LogFormat>().map_err(ConfigError::LogFormat)?,
            None => LogFormat::default(),
        };

        Ok(Self {
            warehouse_id,
            manager,
            log_format,
        })
    }
}
