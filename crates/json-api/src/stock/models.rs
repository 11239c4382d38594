//! Stock request and response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stockroom_app::domain::{
    stock::{
        data::{Direction, NewMovement},
        records::{MovementRecord, MovementUuid},
    },
    users::records::UserUuid,
};

use crate::products::ProductResponse;

/// Stock Movement Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub(crate) struct MovementRequest {
    /// Client-chosen movement identifier. Generated when omitted.
    pub uuid: Option<Uuid>,

    pub product_uuid: Uuid,

    /// Number of items moved. Must be greater than zero.
    pub quantity: i64,

    /// Free-text note. Defaults to "Stock in" or "Stock out".
    pub reason: Option<String>,
}

impl MovementRequest {
    pub(crate) fn into_new_movement(self, direction: Direction, actor: UserUuid) -> NewMovement {
        NewMovement {
            uuid: self.uuid.map_or_else(MovementUuid::new, Into::into),
            product: self.product_uuid.into(),
            direction,
            quantity: self.quantity,
            reason: self.reason,
            actor: Some(actor),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MovementResponse {
    pub uuid: Uuid,
    pub product_uuid: Uuid,

    /// `in` or `out`
    pub direction: String,

    pub quantity: i64,
    pub quantity_before: i64,
    pub quantity_after: i64,
    pub reason: String,

    /// Absent when the acting user has since been deleted
    pub actor_uuid: Option<Uuid>,
    pub actor_name: Option<String>,

    pub created_at: String,
}

impl From<MovementRecord> for MovementResponse {
    fn from(movement: MovementRecord) -> Self {
        MovementResponse {
            uuid: movement.uuid.into(),
            product_uuid: movement.product_uuid.into(),
            direction: movement.direction.to_string(),
            quantity: movement.quantity,
            quantity_before: movement.quantity_before,
            quantity_after: movement.quantity_after,
            reason: movement.reason,
            actor_uuid: movement.actor_uuid.map(Into::into),
            actor_name: movement.actor_name,
            created_at: movement.created_at.to_string(),
        }
    }
}

/// Result of a stock movement: the product with its new quantity and the ledger entry.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct StockMovementResponse {
    pub message: String,
    pub product: ProductResponse,
    pub movement: MovementResponse,
}
