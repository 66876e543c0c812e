use crate::application::ports::StockRepository;
use crate::application::use_cases::StockError;
use crate::domain::Stock;
use std::sync::Arc;

pub struct ListStocksUseCase<R: StockRepository> {
    stock_repo: Arc<R>,
}

impl<R: StockRepository> ListStocksUseCase<R> {
    pub fn new(stock_repo: Arc<R>) -> Self {
        Self { stock_repo }
    }

    /// All stocks ordered by ascending id
    pub async fn execute(&self) -> Result<Vec<Stock>, StockError> {
        self.stock_repo.list().await.map_err(|e| {
            tracing::warn!(error = %e, "Failed to list stocks");
            StockError::from(e)
        })
    }
}
