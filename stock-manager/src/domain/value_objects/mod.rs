mod stock_id;
mod ticker;

pub use stock_id::StockId;
pub use ticker::Ticker;
