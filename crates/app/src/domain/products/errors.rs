//! Products service errors.

use sqlx::{Error, error::ErrorKind};
use thiserror::Error;

const PRIMARY_KEY: &str = "products_pkey";

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    #[error("a product with this sku already exists")]
    DuplicateSku,

    #[error("a product with this uuid already exists")]
    AlreadyExists,

    #[error("product not found")]
    NotFound,

    #[error("cannot delete while stock > 0 (current quantity: {quantity})")]
    Conflict { quantity: i64 },

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for ProductsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        let Some(db_error) = error.as_database_error() else {
            return Self::Sql(error);
        };

        let on_primary_key = db_error.constraint() == Some(PRIMARY_KEY);

        match db_error.kind() {
            ErrorKind::UniqueViolation if on_primary_key => Self::AlreadyExists,
            ErrorKind::UniqueViolation => Self::DuplicateSku,
            ErrorKind::NotNullViolation => Self::InvalidInput("missing required field"),
            ErrorKind::CheckViolation => Self::InvalidInput("product data was rejected"),
            _ => Self::Sql(error),
        }
    }
}
