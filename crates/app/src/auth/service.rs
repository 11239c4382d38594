//! Auth service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;

use crate::{
    auth::{AuthServiceError, hash_api_token, is_well_formed, repository::PgAuthRepository},
    domain::users::records::UserRecord,
};

#[derive(Debug, Clone)]
pub struct PgAuthService {
    repository: PgAuthRepository,
}

impl PgAuthService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgAuthRepository::new(pool),
        }
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<UserRecord, AuthServiceError> {
        if !is_well_formed(bearer_token) {
            return Err(AuthServiceError::NotFound);
        }

        self.repository
            .find_user_by_token_hash(&hash_api_token(bearer_token))
            .await?
            .ok_or(AuthServiceError::NotFound)
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Resolve a raw bearer token into the user it was issued to.
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<UserRecord, AuthServiceError>;
}
