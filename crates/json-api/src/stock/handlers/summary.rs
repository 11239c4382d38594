//! Inventory Summary Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use stockroom_app::domain::products::records::InventorySummary;

use crate::{extensions::*, products::into_status_error};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SummaryResponse {
    /// Number of products in the catalog
    pub total_products: u64,

    /// Items on hand across every product
    pub total_stock_items: u64,

    /// Products below the low-stock threshold
    pub low_stock_products: u64,
}

impl From<InventorySummary> for SummaryResponse {
    fn from(summary: InventorySummary) -> Self {
        SummaryResponse {
            total_products: summary.total_products,
            total_stock_items: summary.total_stock_items,
            low_stock_products: summary.low_stock_products,
        }
    }
}

/// Inventory Summary Handler
#[endpoint(
    tags("stock"),
    summary = "Inventory Summary",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<SummaryResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let summary = state
        .app
        .products
        .summary()
        .await
        .map_err(into_status_error)?;

    Ok(Json(summary.into()))
}
