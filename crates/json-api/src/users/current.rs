//! Current User Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stockroom_app::domain::users::records::UserRecord;

use crate::extensions::*;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UserResponse {
    pub uuid: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: String,
}

impl From<&UserRecord> for UserResponse {
    fn from(user: &UserRecord) -> Self {
        UserResponse {
            uuid: user.uuid.into(),
            name: user.name.clone(),
            email: user.email.clone(),
            created_at: user.created_at.to_string(),
        }
    }
}

/// Current User Handler
///
/// Returns the user the bearer token belongs to.
#[endpoint(
    tags("users"),
    summary = "Current User",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<UserResponse>, StatusError> {
    Ok(Json(depot.actor_or_401()?.into()))
}
