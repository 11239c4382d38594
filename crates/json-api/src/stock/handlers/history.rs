//! Stock History Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{PathParam, QueryParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    extensions::*,
    pagination::{PageMeta, page_request},
    stock::{errors::into_status_error, models::MovementResponse},
};

const DEFAULT_PER_PAGE: u32 = 15;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct HistoryResponse {
    /// Movements of the product, newest first
    pub movements: Vec<MovementResponse>,

    pub meta: PageMeta,
}

/// Stock History Handler
#[endpoint(
    tags("stock"),
    summary = "Product Movement History",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Movement history"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    page: QueryParam<u32, false>,
    per_page: QueryParam<u32, false>,
    depot: &mut Depot,
) -> Result<Json<HistoryResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let page = state
        .app
        .stock
        .list_movements(
            product.into_inner().into(),
            page_request(page.into_inner(), per_page.into_inner(), DEFAULT_PER_PAGE),
        )
        .await
        .map_err(into_status_error)?;

    let meta = PageMeta::from(&page);

    Ok(Json(HistoryResponse {
        movements: page.items.into_iter().map(Into::into).collect(),
        meta,
    }))
}
