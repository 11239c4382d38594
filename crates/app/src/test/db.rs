//! Per-test PostgreSQL databases inside one shared container.

use once_cell::sync::Lazy;
use sqlx::{Connection, PgConnection, PgPool};
use testcontainers::{ContainerAsync, ImageExt, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres as PostgresImage;
use tokio::sync::{OnceCell, mpsc};
use uuid::Uuid;

const PG_USER: &str = "stockroom_test";
const PG_PASSWORD: &str = "stockroom_test_password";

/// Database names are interpolated into DDL, so only a conservative shape is accepted.
fn validate_database_name(name: &str) -> Result<(), String> {
    if name.is_empty() || name.len() > 63 {
        return Err(format!("'{name}' must be 1-63 characters long"));
    }

    if !name.starts_with(|c: char| c.is_ascii_lowercase() || c == '_') {
        return Err(format!("'{name}' must start with a lowercase letter or underscore"));
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    {
        return Err(format!("'{name}' may only contain a-z, 0-9 and underscores"));
    }

    Ok(())
}

static POSTGRES_CONTAINER: Lazy<OnceCell<ContainerAsync<PostgresImage>>> = Lazy::new(OnceCell::new);

/// Databases are dropped by a background task so `Drop` stays synchronous.
static DROP_QUEUE: Lazy<OnceCell<mpsc::UnboundedSender<String>>> = Lazy::new(OnceCell::new);

async fn start_container() -> ContainerAsync<PostgresImage> {
    PostgresImage::default()
        .with_user(PG_USER)
        .with_password(PG_PASSWORD)
        .with_db_name(PG_USER)
        .with_env_var("POSTGRES_INITDB_ARGS", "--auth-host=trust")
        .start()
        .await
        .expect("Failed to start PostgreSQL container")
}

async fn start_drop_queue() -> mpsc::UnboundedSender<String> {
    let (sender, mut receiver) = mpsc::unbounded_channel::<String>();

    tokio::spawn(async move {
        while let Some(name) = receiver.recv().await {
            if let Err(error) = drop_database(&name).await {
                eprintln!("Failed to drop test database '{name}': {error}");
            }
        }
    });

    sender
}

async fn server_url(database: &str) -> Option<String> {
    let container = POSTGRES_CONTAINER.get()?;
    let port = container.get_host_port_ipv4(5432).await.ok()?;
    let host =
        std::env::var("TESTCONTAINERS_HOST_OVERRIDE").unwrap_or_else(|_| "localhost".to_string());

    Some(format!(
        "postgresql://{PG_USER}:{PG_PASSWORD}@{host}:{port}/{database}"
    ))
}

async fn drop_database(name: &str) -> Result<(), sqlx::Error> {
    if validate_database_name(name).is_err() {
        return Ok(());
    }

    let Some(url) = server_url("postgres").await else {
        return Ok(());
    };

    let mut conn = PgConnection::connect(&url).await?;

    sqlx::query(&format!("DROP DATABASE IF EXISTS \"{name}\" WITH (FORCE)"))
        .execute(&mut conn)
        .await?;

    conn.close().await
}

/// A freshly migrated database owned by one test.
///
/// Services commit normally; isolation comes from every test having its own database,
/// which is queued for dropping when the value goes out of scope.
#[derive(Debug)]
pub struct TestDb {
    pool: PgPool,
    name: String,
}

impl Drop for TestDb {
    fn drop(&mut self) {
        if let Some(queue) = DROP_QUEUE.get() {
            let _ = queue.send(self.name.clone());
        }
    }
}

impl TestDb {
    pub async fn new() -> Self {
        let name = format!("stockroom_test_{}", Uuid::now_v7().simple());

        Self::with_name(&name).await
    }

    pub async fn with_name(name: &str) -> Self {
        DROP_QUEUE.get_or_init(start_drop_queue).await;
        POSTGRES_CONTAINER.get_or_init(start_container).await;

        if let Err(error) = validate_database_name(name) {
            panic!("Invalid test database name: {error}");
        }

        let admin_url = server_url("postgres")
            .await
            .expect("PostgreSQL container has no mapped port");

        let mut conn = PgConnection::connect(&admin_url)
            .await
            .expect("Failed to connect to postgres database");

        sqlx::query(&format!("CREATE DATABASE \"{name}\""))
            .execute(&mut conn)
            .await
            .expect("Failed to create test database");

        conn.close()
            .await
            .expect("Failed to close admin connection");

        let url = server_url(name)
            .await
            .expect("PostgreSQL container has no mapped port");

        let pool = PgPool::connect(&url)
            .await
            .expect("Failed to create pool for test database");

        sqlx::migrate!("../../migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations on test database");

        Self {
            pool,
            name: name.to_string(),
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_style_names_are_valid() {
        assert!(validate_database_name("stockroom_test_0192f0c4a1b27c3d").is_ok());
        assert!(validate_database_name("_leading_underscore").is_ok());
    }

    #[test]
    fn unsafe_names_are_rejected() {
        for name in ["", "9lives", "has-hyphen", "quote\"", "Upper", "semi;colon"] {
            assert!(validate_database_name(name).is_err(), "{name} should be rejected");
        }

        assert!(validate_database_name(&"a".repeat(64)).is_err());
    }

    #[tokio::test]
    async fn migrated_database_has_the_inventory_tables() {
        let test_db = TestDb::new().await;

        let tables: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM information_schema.tables \
             WHERE table_schema = 'public' \
               AND table_name IN ('users', 'products', 'stock_movements')",
        )
        .fetch_one(test_db.pool())
        .await
        .expect("Failed to query information_schema");

        assert_eq!(tables, 3);
    }

    #[tokio::test]
    async fn negative_quantity_is_refused_by_storage() {
        let test_db = TestDb::new().await;

        let result = sqlx::query(
            "INSERT INTO products (uuid, name, sku, quantity) VALUES ($1, 'Ghost', 'GH-1', -1)",
        )
        .bind(Uuid::now_v7())
        .execute(test_db.pool())
        .await;

        assert!(result.is_err(), "storage accepted a negative quantity");
    }
}
