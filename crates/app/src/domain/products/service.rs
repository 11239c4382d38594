//! Products service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::products::{
        data::{NewProduct, ProductQuery, ProductUpdate},
        errors::ProductsServiceError,
        records::{InventorySummary, ProductRecord, ProductUuid},
        repository::PgProductsRepository,
    },
    pagination::Page,
};

/// Quantity below which a product counts as low stock, unless configured otherwise.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 10;

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
    low_stock_threshold: i64,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self::with_low_stock_threshold(db, DEFAULT_LOW_STOCK_THRESHOLD)
    }

    #[must_use]
    pub fn with_low_stock_threshold(db: Db, low_stock_threshold: i64) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
            low_stock_threshold,
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(
        &self,
        products: ProductQuery,
    ) -> Result<Page<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let total = self.repository.count_products(&mut tx, &products).await?;
        let items = self.repository.list_products(&mut tx, &products).await?;

        tx.commit().await?;

        Ok(Page::new(items, total, products.page))
    }

    async fn get_product(&self, product: ProductUuid) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let product = self.repository.get_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(product)
    }

    #[tracing::instrument(
        name = "products.service.create_product",
        skip(self, product),
        fields(product_uuid = %product.uuid)
    )]
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let product = product.normalised()?;

        let mut tx = self.db.begin_transaction().await?;

        let created = self.repository.create_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(created)
    }

    #[tracing::instrument(
        name = "products.service.update_product",
        skip(self, update),
        fields(product_uuid = %product)
    )]
    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let update = update.normalised()?;

        let mut tx = self.db.begin_transaction().await?;

        let updated = self
            .repository
            .update_product(&mut tx, product, update)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    #[tracing::instrument(
        name = "products.service.delete_product",
        skip(self),
        fields(product_uuid = %product)
    )]
    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let quantity = self
            .repository
            .lock_product_quantity(&mut tx, product)
            .await?;

        if quantity > 0 {
            return Err(ProductsServiceError::Conflict { quantity });
        }

        let rows_affected = self.repository.delete_product(&mut tx, product).await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    async fn summary(&self) -> Result<InventorySummary, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let summary = self
            .repository
            .inventory_summary(&mut tx, self.low_stock_threshold)
            .await?;

        tx.commit().await?;

        Ok(summary)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves one page of products ordered by name, optionally filtered.
    async fn list_products(
        &self,
        products: ProductQuery,
    ) -> Result<Page<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductUuid) -> Result<ProductRecord, ProductsServiceError>;

    /// Creates a new product with its initial quantity and no movements.
    async fn create_product(&self, product: NewProduct)
    -> Result<ProductRecord, ProductsServiceError>;

    /// Updates a product's descriptive attributes. Quantity is left untouched.
    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Deletes a product and its movements. Refused while the product still has stock.
    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError>;

    /// Aggregate counts across the whole catalog.
    async fn summary(&self) -> Result<InventorySummary, ProductsServiceError>;
}
