//! Ledger arithmetic.
//!
//! Pure functions that decide whether a movement is allowed and what quantity it produces.
//! The service runs them between locking the product row and writing it back.

use crate::domain::stock::{data::Direction, errors::StockServiceError};

/// Before and after snapshot of one movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockChange {
    pub before: i64,
    pub after: i64,
}

/// Reject non-positive magnitudes before any storage is touched.
///
/// # Errors
///
/// Returns [`StockServiceError::InvalidQuantity`] when `quantity <= 0`.
pub fn ensure_positive(quantity: i64) -> Result<(), StockServiceError> {
    if quantity <= 0 {
        return Err(StockServiceError::InvalidQuantity(quantity));
    }

    Ok(())
}

/// Compute the quantity after moving `quantity` units in `direction` from `before`.
///
/// # Errors
///
/// Returns [`StockServiceError::InvalidQuantity`] for a non-positive or overflowing
/// magnitude, and [`StockServiceError::InsufficientStock`] when an outgoing movement would
/// take the quantity below zero.
pub fn apply(
    before: i64,
    direction: Direction,
    quantity: i64,
) -> Result<StockChange, StockServiceError> {
    ensure_positive(quantity)?;

    let after = match direction {
        Direction::In => before
            .checked_add(quantity)
            .ok_or(StockServiceError::InvalidQuantity(quantity))?,
        Direction::Out => {
            if quantity > before {
                return Err(StockServiceError::InsufficientStock { current: before });
            }

            before - quantity
        }
    };

    Ok(StockChange { before, after })
}
