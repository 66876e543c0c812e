use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::{html, rest};
use crate::application::StockRepository;

/// Application state shared across handlers
pub struct AppState<R: StockRepository> {
    pub stock_repo: Arc<R>,
}

impl<R: StockRepository> AppState<R> {
    pub fn new(stock_repo: Arc<R>) -> Self {
        AppState { stock_repo }
    }
}

/// Create the full router: HTML pages plus the JSON API
pub fn create_router<R: StockRepository + 'static>(state: Arc<AppState<R>>) -> Router {
    Router::new()
        .merge(html::html_routes::<R>())
        .merge(rest::api_routes::<R>())
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
