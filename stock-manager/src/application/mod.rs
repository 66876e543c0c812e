pub mod ports;
pub mod use_cases;

pub use ports::{RepositoryError, StockRepository};
pub use use_cases::{
    CreateStockCommand, CreateStockUseCase, DeleteStockUseCase, GetStockUseCase,
    ListStocksUseCase, StockError, UpdateMode, UpdateStockCommand, UpdateStockUseCase,
};
