use crate::domain::{NewStock, Stock, StockId, StockPatch};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Ticker already exists: {0}")]
    DuplicateTicker(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Query failed: {0}")]
    Query(String),
}

/// Repository for the `stocks` table
///
/// Each call is one statement against the store. Writes are committed
/// before the call returns; a failed write leaves no trace.
#[async_trait]
pub trait StockRepository: Send + Sync {
    /// All stocks, ordered by ascending id
    async fn list(&self) -> Result<Vec<Stock>, RepositoryError>;

    /// Get a stock by ID
    async fn get(&self, id: StockId) -> Result<Option<Stock>, RepositoryError>;

    /// Insert a stock and return the id the store assigned to it
    async fn insert(&self, stock: NewStock) -> Result<StockId, RepositoryError>;

    /// Apply a patch. Returns false when no row has this id.
    async fn update(&self, id: StockId, patch: StockPatch) -> Result<bool, RepositoryError>;

    /// Delete a stock. Returns false when no row has this id.
    async fn delete(&self, id: StockId) -> Result<bool, RepositoryError>;
}
