//! Users service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UsersServiceError {
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    #[error("email or token already in use")]
    DuplicateEmail,

    #[error("user not found")]
    NotFound,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for UsersServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::DuplicateEmail,
            Some(ErrorKind::CheckViolation | ErrorKind::NotNullViolation) => {
                Self::InvalidInput("user violates a storage constraint")
            }
            _ => Self::Sql(error),
        }
    }
}
