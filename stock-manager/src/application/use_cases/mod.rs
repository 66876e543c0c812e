mod create_stock;
mod delete_stock;
mod error;
mod get_stock;
mod list_stocks;
mod update_stock;

pub use create_stock::{CreateStockCommand, CreateStockUseCase};
pub use delete_stock::DeleteStockUseCase;
pub use error::StockError;
pub use get_stock::GetStockUseCase;
pub use list_stocks::ListStocksUseCase;
pub use update_stock::{UpdateMode, UpdateStockCommand, UpdateStockUseCase};
