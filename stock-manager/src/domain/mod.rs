pub mod entities;
pub mod services;
pub mod value_objects;

// Re-export entity types
pub use entities::{NewStock, Stock, StockPatch};

// Re-export services
pub use services::{RawStockFields, StockValidator, ValidationError};

// Re-export value objects
pub use value_objects::{StockId, Ticker};
