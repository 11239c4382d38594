//! Auth repository.

use sqlx::{PgPool, Postgres, query_as};

use crate::domain::users::records::UserRecord;

const FIND_USER_BY_TOKEN_HASH_SQL: &str = include_str!("sql/find_user_by_token_hash.sql");

#[derive(Debug, Clone)]
pub(crate) struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn find_user_by_token_hash(
        &self,
        hash: &str,
    ) -> Result<Option<UserRecord>, sqlx::Error> {
        query_as::<Postgres, UserRecord>(FIND_USER_BY_TOKEN_HASH_SQL)
            .bind(hash)
            .fetch_optional(&self.pool)
            .await
    }
}
