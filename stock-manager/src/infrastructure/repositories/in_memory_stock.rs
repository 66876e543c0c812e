use crate::application::ports::{RepositoryError, StockRepository};
use crate::domain::{NewStock, Stock, StockId, StockPatch};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Debug, Default)]
struct StockTable {
    rows: BTreeMap<StockId, Stock>,
    last_id: i64,
}

impl StockTable {
    fn ticker_taken(&self, ticker: &str, except: Option<StockId>) -> bool {
        self.rows
            .values()
            .any(|s| s.ticker.as_str() == ticker && Some(s.id) != except)
    }
}

/// In-memory stock repository
///
/// Same contract as the PostgreSQL table: ids start at 1 and are never
/// reused, tickers are unique. Suitable for tests and running without a
/// database.
pub struct InMemoryStockRepository {
    table: Arc<RwLock<StockTable>>,
}

impl InMemoryStockRepository {
    pub fn new() -> Self {
        Self {
            table: Arc::new(RwLock::new(StockTable::default())),
        }
    }

    /// Number of stored rows (sync)
    pub fn len(&self) -> usize {
        self.table.read().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryStockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for InMemoryStockRepository {
    fn clone(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
        }
    }
}

#[async_trait]
impl StockRepository for InMemoryStockRepository {
    async fn list(&self) -> Result<Vec<Stock>, RepositoryError> {
        Ok(self.table.read().rows.values().cloned().collect())
    }

    async fn get(&self, id: StockId) -> Result<Option<Stock>, RepositoryError> {
        Ok(self.table.read().rows.get(&id).cloned())
    }

    async fn insert(&self, stock: NewStock) -> Result<StockId, RepositoryError> {
        let mut table = self.table.write();
        if table.ticker_taken(stock.ticker.as_str(), None) {
            return Err(RepositoryError::DuplicateTicker(stock.ticker.into_inner()));
        }

        table.last_id += 1;
        let id = StockId::new(table.last_id);
        table.rows.insert(id, stock.with_id(id));
        Ok(id)
    }

    async fn update(&self, id: StockId, patch: StockPatch) -> Result<bool, RepositoryError> {
        let mut table = self.table.write();
        if !table.rows.contains_key(&id) {
            return Ok(false);
        }
        if let Some(ticker) = &patch.ticker {
            if table.ticker_taken(ticker.as_str(), Some(id)) {
                return Err(RepositoryError::DuplicateTicker(ticker.to_string()));
            }
        }

        if let Some(stock) = table.rows.get_mut(&id) {
            patch.apply(stock);
        }
        Ok(true)
    }

    async fn delete(&self, id: StockId) -> Result<bool, RepositoryError> {
        Ok(self.table.write().rows.remove(&id).is_some())
    }
}
