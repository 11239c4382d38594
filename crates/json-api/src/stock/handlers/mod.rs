//! Stock Handlers

pub(crate) mod history;
pub(crate) mod stock_in;
pub(crate) mod stock_out;
pub(crate) mod summary;

use salvo::prelude::*;

use stockroom_app::domain::stock::data::Direction;

use crate::{
    extensions::*,
    observability::observe_movement,
    stock::{
        errors::{into_status_error, outcome},
        models::{MovementRequest, StockMovementResponse},
    },
};

/// Apply a movement on behalf of the authenticated actor and answer with 201.
async fn apply(
    direction: Direction,
    request: MovementRequest,
    depot: &Depot,
    res: &mut Response,
) -> Result<Json<StockMovementResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let actor = depot.actor_or_401()?.uuid;

    let span = tracing::Span::current();

    span.record("product_uuid", tracing::field::display(request.product_uuid));
    span.record("quantity", request.quantity);

    let result = state
        .app
        .stock
        .apply_movement(request.into_new_movement(direction, actor))
        .await;

    observe_movement(direction, outcome(&result));

    let applied = result.map_err(into_status_error)?;

    tracing::info!(
        product_uuid = %applied.product.uuid,
        direction = %direction,
        quantity_before = applied.movement.quantity_before,
        quantity_after = applied.movement.quantity_after,
        "recorded stock movement"
    );

    res.status_code(StatusCode::CREATED);

    Ok(Json(StockMovementResponse {
        message: format!("Stock {direction} recorded"),
        product: applied.product.into(),
        movement: applied.movement.into(),
    }))
}
