use crate::application::ports::StockRepository;
use crate::application::use_cases::StockError;
use crate::domain::{RawStockFields, StockId, StockPatch, StockValidator};
use std::sync::Arc;

/// Which validation rule an update goes through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateMode {
    /// name, ticker and price are all required (HTML edit form)
    #[default]
    Replace,
    /// At least one field is required; absent fields keep their value (JSON API)
    Patch,
}

#[derive(Debug, Clone)]
pub struct UpdateStockCommand {
    pub id: StockId,
    pub fields: RawStockFields,
    pub mode: UpdateMode,
}

pub struct UpdateStockUseCase<R: StockRepository> {
    stock_repo: Arc<R>,
}

impl<R: StockRepository> UpdateStockUseCase<R> {
    pub fn new(stock_repo: Arc<R>) -> Self {
        Self { stock_repo }
    }

    pub async fn execute(&self, command: UpdateStockCommand) -> Result<(), StockError> {
        let id = command.id;
        let patch: StockPatch = match command.mode {
            UpdateMode::Replace => StockValidator::validate_new(&command.fields)?.into(),
            UpdateMode::Patch => StockValidator::validate_patch(&command.fields)?,
        };

        let updated = self.stock_repo.update(id, patch).await.map_err(|e| {
            tracing::warn!(%id, error = %e, "Failed to update stock");
            StockError::from(e)
        })?;

        if !updated {
            return Err(StockError::NotFound(id));
        }

        tracing::info!(%id, "Stock updated");
        Ok(())
    }
}
