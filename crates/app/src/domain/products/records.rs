//! Product Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub uuid: ProductUuid,
    pub name: String,
    pub sku: String,
    pub category: Option<String>,
    pub description: Option<String>,

    /// On-hand quantity at the time the row was read. Never negative.
    pub quantity: i64,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Inventory Summary Record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventorySummary {
    /// Number of products in the catalog.
    pub total_products: u64,

    /// Sum of on-hand quantities across all products. A count of items, not a value.
    pub total_stock_items: u64,

    /// Number of products whose quantity is below the low-stock threshold.
    pub low_stock_products: u64,
}
