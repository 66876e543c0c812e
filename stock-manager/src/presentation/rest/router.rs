use axum::{Router, routing::get};
use std::sync::Arc;

use super::handlers;
use crate::application::StockRepository;
use crate::presentation::AppState;

/// JSON API routes under `/api/stocks`
pub fn api_routes<R: StockRepository + 'static>() -> Router<Arc<AppState<R>>> {
    Router::new()
        .route(
            "/api/stocks",
            get(handlers::list_stocks::<R>).post(handlers::create_stock::<R>),
        )
        .route(
            "/api/stocks/{id}",
            get(handlers::get_stock::<R>)
                .put(handlers::update_stock::<R>)
                .delete(handlers::delete_stock::<R>),
        )
}
