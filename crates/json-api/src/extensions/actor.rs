//! Authenticated actor stored in the depot by the auth middleware.

use salvo::prelude::{Depot, StatusError};
use stockroom_app::domain::users::records::UserRecord;

const ACTOR_DEPOT_KEY: &str = "actor";

pub(crate) trait ActorExt {
    fn insert_actor(&mut self, actor: UserRecord);

    /// The caller's user, or 401 when the request was not authenticated.
    fn actor_or_401(&self) -> Result<&UserRecord, StatusError>;
}

impl ActorExt for Depot {
    fn insert_actor(&mut self, actor: UserRecord) {
        self.insert(ACTOR_DEPOT_KEY, actor);
    }

    fn actor_or_401(&self) -> Result<&UserRecord, StatusError> {
        self.get::<UserRecord>(ACTOR_DEPOT_KEY)
            .map_err(|_missing| StatusError::unauthorized())
    }
}
