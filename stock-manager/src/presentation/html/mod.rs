mod handlers;
mod views;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::StockRepository;
use crate::presentation::AppState;

/// Server-rendered pages and form endpoints
pub fn html_routes<R: StockRepository + 'static>() -> Router<Arc<AppState<R>>> {
    Router::new()
        .route("/", get(handlers::index::<R>))
        .route(
            "/add",
            get(handlers::add_form).post(handlers::add_stock::<R>),
        )
        .route(
            "/edit/{id}",
            get(handlers::edit_form::<R>).post(handlers::edit_stock::<R>),
        )
        .route("/delete/{id}", post(handlers::delete_stock::<R>))
}
