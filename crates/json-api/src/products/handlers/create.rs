//! Create Product Handler

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stockroom_app::domain::products::{data::NewProduct, records::ProductUuid};

use crate::{
    extensions::*,
    products::{ProductResponse, errors::into_status_error},
};

/// Create Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateProductRequest {
    /// Client-chosen identifier. Generated when omitted.
    pub uuid: Option<Uuid>,

    pub name: String,
    pub sku: String,
    pub category: Option<String>,
    pub description: Option<String>,

    /// Initial on-hand quantity
    pub quantity: i64,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(request: CreateProductRequest) -> Self {
        NewProduct {
            uuid: request.uuid.map_or_else(ProductUuid::new, Into::into),
            name: request.name,
            sku: request.sku,
            category: request.category,
            description: request.description,
            quantity: request.quantity,
        }
    }
}

/// Create Product Handler
#[endpoint(
    tags("products"),
    summary = "Create Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::CONFLICT, description = "SKU or uuid already in use"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.create",
    skip(json, depot, res),
    fields(product_uuid = tracing::field::Empty, sku = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CreateProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let product = NewProduct::from(json.into_inner());

    let span = tracing::Span::current();

    span.record("product_uuid", tracing::field::display(product.uuid));
    span.record("sku", product.sku.as_str());

    let product = state
        .app
        .products
        .create_product(product)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/products/{}", product.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    tracing::info!(product_uuid = %product.uuid, quantity = product.quantity, "created product");

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use stockroom_app::domain::products::{MockProductsService, ProductsServiceError};

    use crate::test_helpers::{make_product, products_service, strict_products_mock};

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("products").post(handler))
    }

    fn laptop_body(uuid: ProductUuid, quantity: i64) -> serde_json::Value {
        json!({
            "uuid": uuid.into_uuid(),
            "name": "Laptop Pro 14\"",
            "sku": "LP14-001",
            "category": "Elektronik",
            "quantity": quantity,
        })
    }

    #[tokio::test]
    async fn test_create_product_success() -> TestResult {
        let uuid = ProductUuid::new();

        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .withf(move |new| {
                *new == NewProduct {
                    uuid,
                    name: "Laptop Pro 14\"".to_string(),
                    sku: "LP14-001".to_string(),
                    category: Some("Elektronik".to_string()),
                    description: None,
                    quantity: 15,
                }
            })
            .return_once(move |_| Ok(make_product(uuid, 15)));

        products.expect_list_products().never();
        products.expect_get_product().never();
        products.expect_update_product().never();
        products.expect_delete_product().never();
        products.expect_summary().never();

        let mut res = TestClient::post("http://example.com/products")
            .json(&laptop_body(uuid, 15))
            .send(&make_service(products))
            .await;

        let body: ProductResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/products/{uuid}").as_str()));
        assert_eq!(body.uuid, uuid.into_uuid());
        assert_eq!(body.quantity, 15);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_without_uuid_generates_one() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .withf(|new| new.uuid.into_uuid().get_version_num() == 7)
            .return_once(|new| Ok(make_product(new.uuid, new.quantity)));

        let res = TestClient::post("http://example.com/products")
            .json(&json!({ "name": "Mouse Wireless", "sku": "MS-W002", "quantity": 50 }))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_duplicate_sku_returns_409() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::DuplicateSku));

        let res = TestClient::post("http://example.com/products")
            .json(&laptop_body(ProductUuid::new(), 15))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_reused_uuid_returns_409_naming_uuid() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::AlreadyExists));

        let mut res = TestClient::post("http://example.com/products")
            .json(&laptop_body(ProductUuid::new(), 15))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        let body = res.take_string().await?;

        assert!(body.contains("uuid already exists"), "body: {body}");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_invalid_input_returns_400() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .return_once(|_| {
                Err(ProductsServiceError::InvalidInput(
                    "initial quantity cannot be negative",
                ))
            });

        let mut res = TestClient::post("http://example.com/products")
            .json(&laptop_body(ProductUuid::new(), -1))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert!(
            res.take_string().await?.contains("cannot be negative"),
            "expected the validation message in the body"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_missing_quantity_returns_400() -> TestResult {
        let res = TestClient::post("http://example.com/products")
            .json(&json!({ "name": "Laptop", "sku": "LP14-001" }))
            .send(&make_service(strict_products_mock()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
