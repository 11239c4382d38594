//! Product response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stockroom_app::domain::products::records::ProductRecord;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub uuid: Uuid,

    pub name: String,

    /// Stock-keeping unit, unique across the catalog
    pub sku: String,

    pub category: Option<String>,

    pub description: Option<String>,

    /// On-hand quantity
    pub quantity: i64,

    /// The date and time the product was created
    pub created_at: String,

    /// The date and time the product was last updated
    pub updated_at: String,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            uuid: product.uuid.into(),
            name: product.name,
            sku: product.sku,
            category: product.category,
            description: product.description,
            quantity: product.quantity,
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}
