//! Inventory Config

use clap::Args;

/// Inventory rules that are tunable per deployment.
#[derive(Debug, Args)]
pub struct InventoryConfig {
    /// Products with a quantity strictly below this count as low stock
    #[arg(long, env = "LOW_STOCK_THRESHOLD", default_value_t = 10)]
    pub low_stock_threshold: i64,
}
