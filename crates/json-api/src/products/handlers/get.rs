//! Get Product Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    products::{ProductResponse, errors::into_status_error},
};

/// Get Product Handler
///
/// Returns a product with its current on-hand quantity.
#[endpoint(
    tags("products"),
    summary = "Get Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product found"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let product = state
        .app
        .products
        .get_product(product.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use stockroom_app::domain::products::{
        MockProductsService, ProductsServiceError, records::ProductUuid,
    };

    use crate::test_helpers::{make_product, products_service, strict_products_mock};

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("products/{product}").get(handler))
    }

    #[tokio::test]
    async fn test_get_product_returns_quantity() -> TestResult {
        let uuid = ProductUuid::new();

        let mut products = MockProductsService::new();

        products
            .expect_get_product()
            .once()
            .withf(move |requested| *requested == uuid)
            .return_once(move |_| Ok(make_product(uuid, 15)));

        products.expect_list_products().never();
        products.expect_create_product().never();
        products.expect_update_product().never();
        products.expect_delete_product().never();
        products.expect_summary().never();

        let response: ProductResponse =
            TestClient::get(format!("http://example.com/products/{uuid}"))
                .send(&make_service(products))
                .await
                .take_json()
                .await?;

        assert_eq!(response.uuid, uuid.into_uuid());
        assert_eq!(response.sku, "LP14-001");
        assert_eq!(response.quantity, 15);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_unknown_product_returns_404() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_get_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::NotFound));

        let res = TestClient::get(format!("http://example.com/products/{}", ProductUuid::new()))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_product_invalid_uuid_returns_400() -> TestResult {
        let res = TestClient::get("http://example.com/products/123")
            .send(&make_service(strict_products_mock()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
