pub mod config;
pub mod repositories;

pub use config::{
    AppConfig, ConfigError, DatabaseConfig, Launch, LaunchOptions, ServerConfig, USAGE,
};
pub use repositories::{InMemoryStockRepository, PgStockRepository};
