mod stock_repository;

pub use stock_repository::{RepositoryError, StockRepository};
