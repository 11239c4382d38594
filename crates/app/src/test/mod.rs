//! Shared fixtures for database-backed tests.

mod db;

pub(crate) use context::TestContext;
