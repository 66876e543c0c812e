use crate::application::ports::StockRepository;
use crate::application::use_cases::StockError;
use crate::domain::StockId;
use std::sync::Arc;

pub struct DeleteStockUseCase<R: StockRepository> {
    stock_repo: Arc<R>,
}

impl<R: StockRepository> DeleteStockUseCase<R> {
    pub fn new(stock_repo: Arc<R>) -> Self {
        Self { stock_repo }
    }

    /// Delete by id; zero rows affected is `NotFound`
    pub async fn execute(&self, id: StockId) -> Result<(), StockError> {
        let deleted = self.stock_repo.delete(id).await.map_err(|e| {
            tracing::warn!(%id, error = %e, "Failed to delete stock");
            StockError::from(e)
        })?;

        if !deleted {
            return Err(StockError::NotFound(id));
        }

        tracing::info!(%id, "Stock deleted");
        Ok(())
    }
}
