//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use stockroom_app::domain::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::InvalidInput(reason) => StatusError::bad_request().brief(reason),
        ProductsServiceError::DuplicateSku => {
            StatusError::conflict().brief("A product with this sku already exists")
        }
        ProductsServiceError::AlreadyExists => {
            StatusError::conflict().brief("A product with this uuid already exists")
        }
        ProductsServiceError::NotFound => StatusError::not_found().brief("Product not found"),
        conflict @ ProductsServiceError::Conflict { .. } => {
            StatusError::conflict().brief(conflict.to_string())
        }
        ProductsServiceError::Sql(source) => {
            error!("product storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
