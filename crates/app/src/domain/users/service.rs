//! Users service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;

use crate::domain::users::{
    data::NewUser,
    errors::UsersServiceError,
    records::{UserRecord, UserUuid},
    repository::PgUsersRepository,
};

#[derive(Debug, Clone)]
pub struct PgUsersService {
    repository: PgUsersRepository,
}

impl PgUsersService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgUsersRepository::new(pool),
        }
    }
}

#[async_trait]
impl UsersService for PgUsersService {
    #[tracing::instrument(name = "users.service.create_user", skip(self, user), fields(user_uuid = %user.uuid))]
    async fn create_user(&self, user: NewUser) -> Result<UserRecord, UsersServiceError> {
        let user = user.normalised()?;

        self.repository.create_user(user).await.map_err(Into::into)
    }

    async fn get_user(&self, user: UserUuid) -> Result<UserRecord, UsersServiceError> {
        self.repository.get_user(user).await.map_err(Into::into)
    }

    #[tracing::instrument(name = "users.service.delete_user", skip(self), fields(user_uuid = %user))]
    async fn delete_user(&self, user: UserUuid) -> Result<(), UsersServiceError> {
        let rows_affected = self.repository.delete_user(user).await?;

        if rows_affected == 0 {
            return Err(UsersServiceError::NotFound);
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
/// Actor persistence operations.
pub trait UsersService: Send + Sync {
    /// Creates a user holding the hash of their API token.
    async fn create_user(&self, user: NewUser) -> Result<UserRecord, UsersServiceError>;

    /// Retrieve a single user.
    async fn get_user(&self, user: UserUuid) -> Result<UserRecord, UsersServiceError>;

    /// Deletes a user. Their past movements are kept without an actor.
    async fn delete_user(&self, user: UserUuid) -> Result<(), UsersServiceError>;
}
