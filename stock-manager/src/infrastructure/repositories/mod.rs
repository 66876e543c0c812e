mod in_memory_stock;
mod postgres_stock;

pub use in_memory_stock::InMemoryStockRepository;
pub use postgres_stock::PgStockRepository;
