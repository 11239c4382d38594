//! Stock service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        products::records::ProductUuid,
        stock::{
            data::NewMovement,
            errors::StockServiceError,
            ledger,
            records::{AppliedMovement, MovementRecord},
            repository::{MovementEntry, PgStockRepository},
        },
    },
    pagination::{Page, PageRequest},
};

#[derive(Debug, Clone)]
pub struct PgStockService {
    db: Db,
    repository: PgStockRepository,
}

impl PgStockService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgStockRepository::new(),
        }
    }
}

#[async_trait]
impl StockService for PgStockService {
    #[tracing::instrument(
        name = "stock.service.apply_movement",
        skip(self, movement),
        fields(
            product_uuid = %movement.product,
            direction = %movement.direction,
            quantity = movement.quantity
        )
    )]
    async fn apply_movement(
        &self,
        movement: NewMovement,
    ) -> Result<AppliedMovement, StockServiceError> {
        ledger::ensure_positive(movement.quantity)?;

        let reason = movement
            .resolved_reason()
            .ok_or(StockServiceError::InvalidInput("reason is too long"))?;

        let mut tx = self.db.begin_transaction().await?;

        let product = self
            .repository
            .lock_product(&mut tx, movement.product)
            .await?;

        let change = ledger::apply(product.quantity, movement.direction, movement.quantity)?;

        let product = self
            .repository
            .set_product_quantity(&mut tx, product.uuid, change.after)
            .await?;

        let entry = MovementEntry {
            uuid: movement.uuid,
            product: product.uuid,
            actor: movement.actor,
            direction: movement.direction,
            quantity: movement.quantity,
            change,
            reason: &reason,
        };

        let movement = self.repository.insert_movement(&mut tx, entry).await?;

        tx.commit().await?;

        Ok(AppliedMovement { product, movement })
    }

    async fn list_movements(
        &self,
        product: ProductUuid,
        page: PageRequest,
    ) -> Result<Page<MovementRecord>, StockServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        if !self.repository.product_exists(&mut tx, product).await? {
            return Err(StockServiceError::NotFound);
        }

        let total = self.repository.count_movements(&mut tx, product).await?;
        let items = self
            .repository
            .list_movements(&mut tx, product, page)
            .await?;

        tx.commit().await?;

        Ok(Page::new(items, total, page))
    }
}

#[automock]
#[async_trait]
pub trait StockService: Send + Sync {
    /// Applies one movement to a product's quantity and records it in the ledger.
    ///
    /// The quantity change and the ledger entry are committed together or not at all.
    /// Concurrent movements against the same product are serialised by a row lock, so an
    /// outgoing movement can never take the quantity below zero.
    async fn apply_movement(
        &self,
        movement: NewMovement,
    ) -> Result<AppliedMovement, StockServiceError>;

    /// One page of a product's movements, newest first.
    async fn list_movements(
        &self,
        product: ProductUuid,
        page: PageRequest,
    ) -> Result<Page<MovementRecord>, StockServiceError>;
}
