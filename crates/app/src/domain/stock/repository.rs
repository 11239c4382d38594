//! Stock Repository
//!
//! Owns the only statement that changes a product's quantity after creation. Its items are
//! visible to the stock service alone.

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, query_scalar};
use uuid::Uuid;

use crate::{
    domain::{
        products::records::{ProductRecord, ProductUuid},
        stock::{
            data::Direction,
            ledger::StockChange,
            records::{MovementRecord, MovementUuid},
        },
        users::records::UserUuid,
    },
    pagination::PageRequest,
};

const LOCK_PRODUCT_SQL: &str = include_str!("sql/lock_product.sql");
const SET_PRODUCT_QUANTITY_SQL: &str = include_str!("sql/set_product_quantity.sql");
const INSERT_MOVEMENT_SQL: &str = include_str!("sql/insert_movement.sql");
const LIST_MOVEMENTS_SQL: &str = include_str!("sql/list_movements.sql");
const COUNT_MOVEMENTS_SQL: &str = include_str!("sql/count_movements.sql");
const PRODUCT_EXISTS_SQL: &str = include_str!("sql/product_exists.sql");

/// Movement row as written by the ledger.
#[derive(Debug)]
pub(super) struct MovementEntry<'a> {
    pub(super) uuid: MovementUuid,
    pub(super) product: ProductUuid,
    pub(super) actor: Option<UserUuid>,
    pub(super) direction: Direction,
    pub(super) quantity: i64,
    pub(super) change: StockChange,
    pub(super) reason: &'a str,
}

#[derive(Debug, Clone, Default)]
pub(super) struct PgStockRepository;

impl PgStockRepository {
    #[must_use]
    pub(super) fn new() -> Self {
        Self
    }

    /// Read the product and hold its row lock until the transaction ends.
    pub(super) async fn lock_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(LOCK_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(super) async fn set_product_quantity(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        quantity: i64,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(SET_PRODUCT_QUANTITY_SQL)
            .bind(product.into_uuid())
            .bind(quantity)
            .fetch_one(&mut **tx)
            .await
    }

    pub(super) async fn insert_movement(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        entry: MovementEntry<'_>,
    ) -> Result<MovementRecord, sqlx::Error> {
        query_as::<Postgres, MovementRecord>(INSERT_MOVEMENT_SQL)
            .bind(entry.uuid.into_uuid())
            .bind(entry.product.into_uuid())
            .bind(entry.actor.map(UserUuid::into_uuid))
            .bind(entry.direction.as_str())
            .bind(entry.quantity)
            .bind(entry.change.before)
            .bind(entry.change.after)
            .bind(entry.reason)
            .fetch_one(&mut **tx)
            .await
    }

    pub(super) async fn product_exists(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<bool, sqlx::Error> {
        query_scalar(PRODUCT_EXISTS_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(super) async fn list_movements(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        page: PageRequest,
    ) -> Result<Vec<MovementRecord>, sqlx::Error> {
        query_as::<Postgres, MovementRecord>(LIST_MOVEMENTS_SQL)
            .bind(product.into_uuid())
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&mut **tx)
            .await
    }

    pub(super) async fn count_movements(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<u64, sqlx::Error> {
        let count: i64 = query_scalar(COUNT_MOVEMENTS_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await?;

        u64::try_from(count).map_err(|e| sqlx::Error::ColumnDecode {
            index: "count".to_string(),
            source: Box::new(e),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for MovementRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let direction = row
            .try_get::<String, _>("direction")?
            .parse::<Direction>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "direction".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            uuid: MovementUuid::from_uuid(row.try_get("uuid")?),
            product_uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
            direction,
            quantity: row.try_get("quantity")?,
            quantity_before: row.try_get("quantity_before")?,
            quantity_after: row.try_get("quantity_after")?,
            reason: row.try_get("reason")?,
            actor_uuid: row
                .try_get::<Option<Uuid>, _>("user_uuid")?
                .map(UserUuid::from_uuid),
            actor_name: row.try_get("actor_name")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
