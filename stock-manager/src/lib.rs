//! Stock Manager
//!
//! Keeps a table of stocks (name, ticker, price) and serves it two ways:
//! server-rendered HTML forms and a JSON API.
//!
//! # Architecture
//!
//! - **Domain**: `Stock`, `Ticker`, and the `StockValidator`
//! - **Application**: the `StockRepository` port and one use case per operation
//! - **Infrastructure**: PostgreSQL and in-memory repositories, configuration
//! - **Presentation**: HTML pages (`/`, `/add`, `/edit/{id}`, `/delete/{id}`)
//!   and the REST API (`/api/stocks`)
//!
//! # Example
//!
//! ```ignore
//! use stock_manager::{AppConfig, StockManager};
//!
//! #[tokio::main]
//! async fn main() {
//!     let manager = StockManager::connect(AppConfig::default()).await.unwrap();
//!     manager.run().await.unwrap();
//! }
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types
pub use domain::{
    NewStock, RawStockFields, Stock, StockId, StockPatch, StockValidator, Ticker, ValidationError,
};

pub use infrastructure::{
    AppConfig, ConfigError, DatabaseConfig, InMemoryStockRepository, Launch, LaunchOptions,
    PgStockRepository, ServerConfig,
};

pub use application::{RepositoryError, StockError, StockRepository};

pub use presentation::{ApiError, AppState, create_router};

use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// The stock manager server
pub struct StockManager<R: StockRepository + 'static> {
    pub config: AppConfig,
    pub stock_repo: Arc<R>,
}

impl<R: StockRepository + 'static> StockManager<R> {
    /// Create a server over an existing repository
    pub fn with_repository(config: AppConfig, stock_repo: Arc<R>) -> Self {
        StockManager { config, stock_repo }
    }

    /// Create the HTTP router
    pub fn router(&self) -> Router {
        let state = Arc::new(AppState::new(Arc::clone(&self.stock_repo)));
        create_router(state)
    }

    /// Run the server until the listener fails
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let addr = self.config.bind_addr();
        let router = self.router();

        tracing::info!("Stock manager listening on {}", addr);

        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}

impl StockManager<PgStockRepository> {
    /// Connect to PostgreSQL and, if configured, create the `stocks` table.
    ///
    /// An unreachable store is an error here; callers treat it as fatal.
    pub async fn connect(config: AppConfig) -> Result<Self, RepositoryError> {
        let repo = PgStockRepository::connect(&config.database).await?;
        if config.database.create_schema {
            repo.ensure_schema().await?;
        }
        Ok(Self::with_repository(config, Arc::new(repo)))
    }
}

impl StockManager<InMemoryStockRepository> {
    /// Server backed by an in-memory table (nothing is persisted)
    pub fn in_memory(config: AppConfig) -> Self {
        Self::with_repository(config, Arc::new(InMemoryStockRepository::new()))
    }
}
