//! Stock Errors

use salvo::http::StatusError;
use tracing::error;

use stockroom_app::domain::stock::StockServiceError;

use crate::observability::MovementOutcome;

pub(crate) fn into_status_error(error: StockServiceError) -> StatusError {
    match error {
        rejected @ (StockServiceError::InvalidQuantity(_)
        | StockServiceError::InsufficientStock { .. }) => {
            StatusError::unprocessable_entity().brief(rejected.to_string())
        }
        StockServiceError::InvalidInput(reason) => StatusError::bad_request().brief(reason),
        StockServiceError::DuplicateMovement => {
            StatusError::conflict().brief("A movement with this uuid already exists")
        }
        StockServiceError::NotFound => StatusError::not_found().brief("Product not found"),
        StockServiceError::Sql(source) => {
            error!("stock storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}

pub(crate) fn outcome<T>(result: &Result<T, StockServiceError>) -> MovementOutcome {
    match result {
        Ok(_) => MovementOutcome::Applied,
        Err(StockServiceError::Sql(_)) => MovementOutcome::Failed,
        Err(_) => MovementOutcome::Rejected,
    }
}
