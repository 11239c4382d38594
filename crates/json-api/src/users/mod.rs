//! Users

pub(crate) mod current;
