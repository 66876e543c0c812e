use crate::application::ports::StockRepository;
use crate::application::use_cases::StockError;
use crate::domain::{RawStockFields, Stock, StockValidator};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct CreateStockCommand {
    pub fields: RawStockFields,
}

pub struct CreateStockUseCase<R: StockRepository> {
    stock_repo: Arc<R>,
}

impl<R: StockRepository> CreateStockUseCase<R> {
    pub fn new(stock_repo: Arc<R>) -> Self {
        Self { stock_repo }
    }

    pub async fn execute(&self, command: CreateStockCommand) -> Result<Stock, StockError> {
        // Every field is required; nothing reaches the store otherwise
        let new_stock = StockValidator::validate_new(&command.fields)?;

        let id = self
            .stock_repo
            .insert(new_stock.clone())
            .await
            .map_err(|e| {
                tracing::warn!(ticker = %new_stock.ticker, error = %e, "Failed to add stock");
                StockError::from(e)
            })?;

        tracing::info!(%id, ticker = %new_stock.ticker, "Stock created");
        Ok(new_stock.with_id(id))
    }
}
