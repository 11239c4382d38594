//! Stock Data

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use thiserror::Error;

use crate::domain::{
    products::records::ProductUuid, stock::records::MovementUuid, users::records::UserUuid,
};

pub const REASON_MAX_CHARS: usize = 255;

/// Which way stock moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Stock received into the warehouse.
    In,

    /// Stock leaving the warehouse.
    Out,
}

impl Direction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
        }
    }

    /// Reason recorded when the caller does not give one.
    #[must_use]
    pub const fn default_reason(self) -> &'static str {
        match self {
            Self::In => "Stock in",
            Self::Out => "Stock out",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown movement direction: {0}")]
pub struct UnknownDirection(pub String);

impl FromStr for Direction {
    type Err = UnknownDirection;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "in" => Ok(Self::In),
            "out" => Ok(Self::Out),
            other => Err(UnknownDirection(other.to_string())),
        }
    }
}

/// New Movement Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovement {
    pub uuid: MovementUuid,
    pub product: ProductUuid,
    pub direction: Direction,

    /// Magnitude of the change. Must be positive.
    pub quantity: i64,

    pub reason: Option<String>,

    /// Whoever performed the movement, when known.
    pub actor: Option<UserUuid>,
}

impl NewMovement {
    /// The reason to record: trimmed, or the direction's default label when blank.
    pub(crate) fn resolved_reason(&self) -> Option<String> {
        let reason = self
            .reason
            .as_deref()
            .map(str::trim)
            .filter(|reason| !reason.is_empty())
            .unwrap_or(self.direction.default_reason());

        (reason.chars().count() <= REASON_MAX_CHARS).then(|| reason.to_owned())
    }
}
