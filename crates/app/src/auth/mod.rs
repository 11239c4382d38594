//! Authentication

mod errors;
mod repository;
mod service;
mod token;

pub use errors::*;
pub use service::*;
pub use token::*;
