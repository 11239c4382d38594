//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::{AuthService, PgAuthService},
    database::{self, Db},
    domain::{
        products::{DEFAULT_LOW_STOCK_THRESHOLD, PgProductsService, ProductsService},
        stock::{PgStockService, StockService},
        users::{PgUsersService, UsersService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

/// Tunables passed down to the services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppSettings {
    /// Products with a quantity strictly below this count as low stock.
    pub low_stock_threshold: i64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub stock: Arc<dyn StockService>,
    pub users: Arc<dyn UsersService>,
    pub auth: Arc<dyn AuthService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(url: &str, settings: AppSettings) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool.clone());

        Ok(Self {
            products: Arc::new(PgProductsService::with_low_stock_threshold(
                db.clone(),
                settings.low_stock_threshold,
            )),
            stock: Arc::new(PgStockService::new(db)),
            users: Arc::new(PgUsersService::new(pool.clone())),
            auth: Arc::new(PgAuthService::new(pool)),
        })
    }
}
