//! Products Repository
//!
//! Reads and writes catalog metadata. The only statement here that sets a quantity is the
//! initial insert; every later change goes through the stock repository.

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};

use crate::domain::products::{
    data::{NewProduct, ProductQuery, ProductUpdate},
    records::{InventorySummary, ProductRecord, ProductUuid},
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const COUNT_PRODUCTS_SQL: &str = include_str!("sql/count_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const LOCK_PRODUCT_QUANTITY_SQL: &str = include_str!("sql/lock_product_quantity.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");
const INVENTORY_SUMMARY_SQL: &str = include_str!("sql/inventory_summary.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        products: &ProductQuery,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_SQL)
            .bind(products.search_pattern())
            .bind(products.page.limit())
            .bind(products.page.offset())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn count_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        products: &ProductQuery,
    ) -> Result<u64, sqlx::Error> {
        let count: i64 = query_scalar(COUNT_PRODUCTS_SQL)
            .bind(products.search_pattern())
            .fetch_one(&mut **tx)
            .await?;

        decode_count("count", count)
    }

    pub(crate) async fn get_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(GET_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Lock the product row for the rest of the transaction and return its quantity.
    pub(crate) async fn lock_product_quantity(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<i64, sqlx::Error> {
        query_scalar(LOCK_PRODUCT_QUANTITY_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: NewProduct,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(CREATE_PRODUCT_SQL)
            .bind(product.uuid.into_uuid())
            .bind(product.name)
            .bind(product.sku)
            .bind(product.category)
            .bind(product.description)
            .bind(product.quantity)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(UPDATE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .bind(update.name)
            .bind(update.sku)
            .bind(update.category)
            .bind(update.description)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn inventory_summary(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        low_stock_threshold: i64,
    ) -> Result<InventorySummary, sqlx::Error> {
        let row = query(INVENTORY_SUMMARY_SQL)
            .bind(low_stock_threshold)
            .fetch_one(&mut **tx)
            .await?;

        Ok(InventorySummary {
            total_products: decode_count("total_products", row.try_get("total_products")?)?,
            total_stock_items: decode_count(
                "total_stock_items",
                row.try_get("total_stock_items")?,
            )?,
            low_stock_products: decode_count(
                "low_stock_products",
                row.try_get("low_stock_products")?,
            )?,
        })
    }
}

fn decode_count(column: &str, value: i64) -> Result<u64, sqlx::Error> {
    u64::try_from(value).map_err(|e| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            sku: row.try_get("sku")?,
            category: row.try_get("category")?,
            description: row.try_get("description")?,
            quantity: row.try_get("quantity")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
