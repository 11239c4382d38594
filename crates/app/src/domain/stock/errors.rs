//! Stock service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StockServiceError {
    #[error("quantity must be greater than 0 (got {0})")]
    InvalidQuantity(i64),

    #[error("insufficient stock, current quantity: {current}")]
    InsufficientStock { current: i64 },

    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    #[error("a movement with this uuid already exists")]
    DuplicateMovement,

    #[error("product not found")]
    NotFound,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for StockServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidInput("unknown actor"),
            Some(ErrorKind::UniqueViolation) => Self::DuplicateMovement,
            _ => Self::Sql(error),
        }
    }
}
