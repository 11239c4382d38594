//! Update Product Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stockroom_app::domain::products::data::ProductUpdate;

use crate::{
    extensions::*,
    products::{ProductResponse, errors::into_status_error},
};

/// Update Product Request
///
/// Quantity is not accepted here; use the stock endpoints.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub(crate) struct UpdateProductRequest {
    pub name: String,
    pub sku: String,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl From<UpdateProductRequest> for ProductUpdate {
    fn from(request: UpdateProductRequest) -> Self {
        ProductUpdate {
            name: request.name,
            sku: request.sku,
            category: request.category,
            description: request.description,
        }
    }
}

/// Product Update Handler
#[endpoint(
    tags("products"),
    summary = "Update Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::CONFLICT, description = "SKU already in use"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.update",
    skip(product, json, depot),
    fields(product_uuid = tracing::field::Empty, sku = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    json: JsonBody<UpdateProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let request = json.into_inner();
    let product = product.into_inner();

    let span = tracing::Span::current();

    span.record("product_uuid", tracing::field::display(product));
    span.record("sku", request.sku.as_str());

    let product = state
        .app
        .products
        .update_product(product.into(), request.into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(product_uuid = %product.uuid, "updated product");

    Ok(Json(product.into()))
}
