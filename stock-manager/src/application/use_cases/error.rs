use crate::application::ports::RepositoryError;
use crate::domain::{StockId, ValidationError};
use thiserror::Error;

/// Failure of a stock use case, as seen by both presentations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StockError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid price: {0:?}")]
    InvalidPrice(String),

    #[error("Ticker already exists: {0}")]
    DuplicateTicker(String),

    #[error("Stock not found: {0}")]
    NotFound(StockId),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Store error: {0}")]
    Store(String),
}

impl From<ValidationError> for StockError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::MissingField(field) => StockError::MissingField(field),
            ValidationError::InvalidPrice(raw) => StockError::InvalidPrice(raw),
        }
    }
}

impl From<RepositoryError> for StockError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::DuplicateTicker(t) => StockError::DuplicateTicker(t),
            RepositoryError::Unavailable(msg) => StockError::StoreUnavailable(msg),
            RepositoryError::Query(msg) => StockError::Store(msg),
        }
    }
}
