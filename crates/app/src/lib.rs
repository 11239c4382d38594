//! Warehouse inventory domain: catalog, stock ledger and the actors recorded on it.

pub mod auth;
pub mod context;
pub mod database;
pub mod domain;
pub mod pagination;

#[cfg(test)]
mod test;

mod uuids;
