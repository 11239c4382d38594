//! Server configuration module

use clap::Parser;

use crate::config::{
    db::DatabaseConfig,
    inventory::InventoryConfig,
    observability::{LoggingConfig, TracingConfig},
    server::ServerRuntimeConfig,
};

pub(crate) mod db;
pub(crate) mod inventory;
pub(crate) mod observability;
pub(crate) mod server;

/// Stockroom JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "stockroom-json", about = "Stockroom JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// OpenTelemetry export settings.
    #[command(flatten)]
    pub tracing: TracingConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Inventory rules.
    #[command(flatten)]
    pub inventory: InventoryConfig,
}

impl ServerConfig {
    /// Load configuration from `.env`, the environment and CLI arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_only_the_database_is_given() -> Result<(), clap::Error> {
        let config = ServerConfig::try_parse_from([
            "stockroom-json",
            "--database-url",
            "postgres://localhost/stockroom",
        ])?;

        assert_eq!(config.inventory.low_stock_threshold, 10);
        assert!(!config.tracing.otel_enabled);
        assert_eq!(config.logging.slow_request_threshold_ms, 1_000);

        Ok(())
    }

    #[test]
    fn low_stock_threshold_is_configurable() -> Result<(), clap::Error> {
        let config = ServerConfig::try_parse_from([
            "stockroom-json",
            "--database-url",
            "postgres://localhost/stockroom",
            "--low-stock-threshold",
            "25",
            "--port",
            "9000",
        ])?;

        assert_eq!(config.inventory.low_stock_threshold, 25);
        assert_eq!(config.socket_addr(), "0.0.0.0:9000");

        Ok(())
    }
}
