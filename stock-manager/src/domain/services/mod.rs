mod stock_validator;

pub use stock_validator::{RawStockFields, StockValidator, ValidationError};
