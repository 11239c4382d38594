//! Users Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};

use crate::domain::users::{
    data::NewUser,
    records::{UserRecord, UserUuid},
};

const CREATE_USER_SQL: &str = include_str!("sql/create_user.sql");
const GET_USER_SQL: &str = include_str!("sql/get_user.sql");
const DELETE_USER_SQL: &str = include_str!("sql/delete_user.sql");

#[derive(Debug, Clone)]
pub(crate) struct PgUsersRepository {
    pool: PgPool,
}

impl PgUsersRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn create_user(&self, user: NewUser) -> Result<UserRecord, sqlx::Error> {
        query_as::<Postgres, UserRecord>(CREATE_USER_SQL)
            .bind(user.uuid.into_uuid())
            .bind(user.name)
            .bind(user.email)
            .bind(user.token_hash)
            .fetch_one(&self.pool)
            .await
    }

    pub(crate) async fn get_user(&self, user: UserUuid) -> Result<UserRecord, sqlx::Error> {
        query_as::<Postgres, UserRecord>(GET_USER_SQL)
            .bind(user.into_uuid())
            .fetch_one(&self.pool)
            .await
    }

    pub(crate) async fn delete_user(&self, user: UserUuid) -> Result<u64, sqlx::Error> {
        let result = query(DELETE_USER_SQL)
            .bind(user.into_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

impl<'r> FromRow<'r, PgRow> for UserRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: UserUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
