use crate::application::ports::StockRepository;
use crate::application::use_cases::StockError;
use crate::domain::{Stock, StockId};
use std::sync::Arc;

pub struct GetStockUseCase<R: StockRepository> {
    stock_repo: Arc<R>,
}

impl<R: StockRepository> GetStockUseCase<R> {
    pub fn new(stock_repo: Arc<R>) -> Self {
        Self { stock_repo }
    }

    pub async fn execute(&self, id: StockId) -> Result<Stock, StockError> {
        self.stock_repo
            .get(id)
            .await
            .map_err(|e| {
                tracing::warn!(%id, error = %e, "Failed to fetch stock");
                StockError::from(e)
            })?
            .ok_or(StockError::NotFound(id))
    }
}
