use crate::application::ports::{RepositoryError, StockRepository};
use crate::domain::{NewStock, Stock, StockId, StockPatch, Ticker};
use crate::infrastructure::config::DatabaseConfig;
use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS stocks (
    id BIGSERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    ticker TEXT NOT NULL UNIQUE,
    price DOUBLE PRECISION NOT NULL
)";

// Casts let tables created with SERIAL ids or NUMERIC prices decode as well
const SELECT_ALL: &str = "SELECT id::BIGINT AS id, name, ticker, price::DOUBLE PRECISION AS price \
     FROM stocks ORDER BY id ASC";

const SELECT_BY_ID: &str = "SELECT id::BIGINT AS id, name, ticker, price::DOUBLE PRECISION AS price \
     FROM stocks WHERE id = $1";

#[derive(Debug, sqlx::FromRow)]
struct StockRow {
    id: i64,
    name: String,
    ticker: String,
    price: f64,
}

impl TryFrom<StockRow> for Stock {
    type Error = RepositoryError;

    fn try_from(row: StockRow) -> Result<Self, Self::Error> {
        let ticker = Ticker::new(row.ticker)
            .map_err(|e| RepositoryError::Query(format!("row {}: {}", row.id, e)))?;
        Ok(Stock {
            id: StockId::new(row.id),
            name: row.name,
            ticker,
            price: row.price,
        })
    }
}

/// PostgreSQL-backed stock repository
///
/// Each request borrows a connection from the pool for exactly one
/// statement. Writes run inside a transaction; dropping it on any error path
/// rolls back and hands the connection back to the pool.
#[derive(Clone)]
pub struct PgStockRepository {
    pool: PgPool,
}

impl PgStockRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open the pool. Fails if the first connection cannot be established.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, RepositoryError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect(&config.url)
            .await
            .map_err(map_error)?;

        tracing::info!(
            max_connections = config.max_connections,
            "Connected to PostgreSQL"
        );
        Ok(Self::new(pool))
    }

    /// Create the `stocks` table when it does not exist yet
    pub async fn ensure_schema(&self) -> Result<(), RepositoryError> {
        sqlx::query(CREATE_TABLE)
            .execute(&self.pool)
            .await
            .map_err(map_error)?;
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl StockRepository for PgStockRepository {
    async fn list(&self) -> Result<Vec<Stock>, RepositoryError> {
        let rows: Vec<StockRow> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(map_error)?;

        rows.into_iter().map(Stock::try_from).collect()
    }

    async fn get(&self, id: StockId) -> Result<Option<Stock>, RepositoryError> {
        let row: Option<StockRow> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_error)?;

        row.map(Stock::try_from).transpose()
    }

    async fn insert(&self, stock: NewStock) -> Result<StockId, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_error)?;

        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO stocks (name, ticker, price) VALUES ($1, $2, $3) RETURNING id::BIGINT",
        )
        .bind(&stock.name)
        .bind(stock.ticker.as_str())
        .bind(stock.price)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, stock.ticker.as_str()))?;

        tx.commit().await.map_err(map_error)?;
        Ok(StockId::new(id))
    }

    async fn update(&self, id: StockId, patch: StockPatch) -> Result<bool, RepositoryError> {
        let ticker = patch.ticker.as_ref().map(Ticker::as_str);
        let mut tx = self.pool.begin().await.map_err(map_error)?;

        let result = sqlx::query(
            "UPDATE stocks SET name = COALESCE($1, name), ticker = COALESCE($2, ticker), \
             price = COALESCE($3, price) WHERE id = $4",
        )
        .bind(patch.name.as_deref())
        .bind(ticker)
        .bind(patch.price)
        .bind(id.value())
        .execute(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, ticker.unwrap_or_default()))?;

        tx.commit().await.map_err(map_error)?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: StockId) -> Result<bool, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_error)?;

        let result = sqlx::query("DELETE FROM stocks WHERE id = $1")
            .bind(id.value())
            .execute(&mut *tx)
            .await
            .map_err(map_error)?;

        tx.commit().await.map_err(map_error)?;
        Ok(result.rows_affected() > 0)
    }
}

fn map_write_error(err: sqlx::Error, ticker: &str) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            RepositoryError::DuplicateTicker(ticker.to_string())
        }
        _ => map_error(err),
    }
}

fn map_error(err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::Protocol(_) => RepositoryError::Unavailable(err.to_string()),
        other => RepositoryError::Query(other.to_string()),
    }
}
