//! Stock Out Handler

use salvo::{oapi::extract::JsonBody, prelude::*};

use stockroom_app::domain::stock::data::Direction;

use crate::stock::models::{MovementRequest, StockMovementResponse};

/// Stock Out Handler
///
/// Takes items out of the warehouse. Refused when the product does not hold enough stock.
#[endpoint(
    tags("stock"),
    summary = "Stock Out",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Movement recorded"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid quantity or insufficient stock"),
        (status_code = StatusCode::CONFLICT, description = "Movement uuid already in use"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "stock.out",
    skip(json, depot, res),
    fields(product_uuid = tracing::field::Empty, quantity = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<MovementRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<StockMovementResponse>, StatusError> {
    super::apply(Direction::Out, json.into_inner(), depot, res).await
}
