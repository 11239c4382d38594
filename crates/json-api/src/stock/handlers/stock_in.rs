//! Stock In Handler

use salvo::{oapi::extract::JsonBody, prelude::*};

use stockroom_app::domain::stock::data::Direction;

use crate::stock::models::{MovementRequest, StockMovementResponse};

/// Stock In Handler
///
/// Receives items into the warehouse, increasing the product's quantity.
#[endpoint(
    tags("stock"),
    summary = "Stock In",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Movement recorded"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid quantity"),
        (status_code = StatusCode::CONFLICT, description = "Movement uuid already in use"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "stock.in",
    skip(json, depot, res),
    fields(product_uuid = tracing::field::Empty, quantity = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<MovementRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<StockMovementResponse>, StatusError> {
    super::apply(Direction::In, json.into_inner(), depot, res).await
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use stockroom_app::domain::{
        products::records::ProductUuid,
        stock::{
            MockStockService, StockServiceError,
            records::{AppliedMovement, MovementUuid},
        },
    };

    use crate::test_helpers::{
        TEST_ACTOR_UUID, TestServices, make_movement, make_product, stock_service,
        strict_stock_mock,
    };

    use super::*;

    fn route() -> Router {
        Router::with_path("stock/in").post(handler)
    }

    #[tokio::test]
    async fn test_stock_in_records_movement_for_actor() -> TestResult {
        let product = ProductUuid::new();

        let mut stock = MockStockService::new();

        stock
            .expect_apply_movement()
            .once()
            .withf(move |movement| {
                movement.product == product
                    && movement.direction == Direction::In
                    && movement.quantity == 5
                    && movement.reason.as_deref() == Some("Restock")
                    && movement.actor == Some(TEST_ACTOR_UUID)
            })
            .return_once(move |_| {
                Ok(AppliedMovement {
                    product: make_product(product, 20),
                    movement: make_movement(product, Direction::In, 15, 20),
                })
            });

        stock.expect_list_movements().never();

        let mut res = TestClient::post("http://example.com/stock/in")
            .json(&json!({ "product_uuid": product.into_uuid(), "quantity": 5, "reason": "Restock" }))
            .send(&stock_service(stock, route()))
            .await;

        let body: StockMovementResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.message, "Stock in recorded");
        assert_eq!(body.product.quantity, 20);
        assert_eq!(body.movement.direction, "in");
        assert_eq!(body.movement.quantity_before, 15);
        assert_eq!(body.movement.quantity_after, 20);
        assert_eq!(body.movement.actor_uuid, Some(TEST_ACTOR_UUID.into_uuid()));

        Ok(())
    }

    #[tokio::test]
    async fn test_stock_in_zero_quantity_returns_422() -> TestResult {
        let mut stock = MockStockService::new();

        stock
            .expect_apply_movement()
            .once()
            .return_once(|_| Err(StockServiceError::InvalidQuantity(0)));

        let res = TestClient::post("http://example.com/stock/in")
            .json(&json!({ "product_uuid": ProductUuid::new().into_uuid(), "quantity": 0 }))
            .send(&stock_service(stock, route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));

        Ok(())
    }

    #[tokio::test]
    async fn test_stock_in_unknown_product_returns_404() -> TestResult {
        let mut stock = MockStockService::new();

        stock
            .expect_apply_movement()
            .once()
            .return_once(|_| Err(StockServiceError::NotFound));

        let res = TestClient::post("http://example.com/stock/in")
            .json(&json!({ "product_uuid": ProductUuid::new().into_uuid(), "quantity": 1 }))
            .send(&stock_service(stock, route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_stock_in_malformed_product_uuid_returns_400() -> TestResult {
        let res = TestClient::post("http://example.com/stock/in")
            .json(&json!({ "product_uuid": "LP14-001", "quantity": 1 }))
            .send(&stock_service(strict_stock_mock(), route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_stock_in_misspelled_reason_field_returns_400() -> TestResult {
        let res = TestClient::post("http://example.com/stock/in")
            .json(&json!({
                "product_uuid": ProductUuid::new().into_uuid(),
                "quantity": 1,
                "description": "Restock",
            }))
            .send(&stock_service(strict_stock_mock(), route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_stock_in_reused_movement_uuid_returns_409() -> TestResult {
        let mut stock = MockStockService::new();

        stock
            .expect_apply_movement()
            .once()
            .return_once(|_| Err(StockServiceError::DuplicateMovement));

        let res = TestClient::post("http://example.com/stock/in")
            .json(&json!({
                "uuid": MovementUuid::new().into_uuid(),
                "product_uuid": ProductUuid::new().into_uuid(),
                "quantity": 1,
            }))
            .send(&stock_service(stock, route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }

    #[tokio::test]
    async fn test_stock_in_without_actor_returns_401() -> TestResult {
        let res = TestClient::post("http://example.com/stock/in")
            .json(&json!({ "product_uuid": ProductUuid::new().into_uuid(), "quantity": 1 }))
            .send(&TestServices::strict().into_service_without_actor(route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }
}
