//! Product Index Handler

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use stockroom_app::domain::products::data::ProductQuery;

use crate::{
    extensions::*,
    pagination::{PageMeta, page_request},
    products::{ProductResponse, errors::into_status_error},
};

const DEFAULT_PER_PAGE: u32 = 10;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    /// One page of products, ordered by name
    pub products: Vec<ProductResponse>,

    pub meta: PageMeta,
}

/// Product Index Handler
///
/// Returns one page of products, optionally filtered by a name or sku fragment.
#[endpoint(
    tags("products"),
    summary = "List Products",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    search: QueryParam<String, false>,
    page: QueryParam<u32, false>,
    per_page: QueryParam<u32, false>,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let query = ProductQuery {
        search: search.into_inner(),
        page: page_request(page.into_inner(), per_page.into_inner(), DEFAULT_PER_PAGE),
    };

    let page = state
        .app
        .products
        .list_products(query)
        .await
        .map_err(into_status_error)?;

    let meta = PageMeta::from(&page);

    Ok(Json(ProductsResponse {
        products: page.items.into_iter().map(Into::into).collect(),
        meta,
    }))
}
