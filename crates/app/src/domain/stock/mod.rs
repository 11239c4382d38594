//! Stock Ledger
//!
//! Every quantity change after a product is created goes through [`StockService`], which
//! records a movement alongside it.

pub mod data;
pub mod errors;
pub mod ledger;
pub mod records;
mod repository;
pub mod service;

pub use errors::StockServiceError;
pub use service::*;
