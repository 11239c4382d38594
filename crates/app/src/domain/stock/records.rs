//! Stock Movement Records

use jiff::Timestamp;

use crate::{
    domain::{
        products::records::{ProductRecord, ProductUuid},
        stock::data::Direction,
        users::records::UserUuid,
    },
    uuids::TypedUuid,
};

/// Movement UUID
pub type MovementUuid = TypedUuid<MovementRecord>;

/// Movement Record
///
/// Immutable once written. `quantity_before` and `quantity_after` are snapshots taken when
/// the movement was applied.
#[derive(Debug, Clone, PartialEq)]
pub struct MovementRecord {
    pub uuid: MovementUuid,
    pub product_uuid: ProductUuid,
    pub direction: Direction,
    pub quantity: i64,
    pub quantity_before: i64,
    pub quantity_after: i64,
    pub reason: String,

    /// Cleared when the acting user is deleted.
    pub actor_uuid: Option<UserUuid>,
    pub actor_name: Option<String>,

    pub created_at: Timestamp,
}

/// Result of applying a movement: the product with its fresh quantity and the ledger entry.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedMovement {
    pub product: ProductRecord,
    pub movement: MovementRecord,
}
