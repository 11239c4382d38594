//! Stockroom Domain Concerns

pub mod products;
pub mod stock;
pub mod users;
