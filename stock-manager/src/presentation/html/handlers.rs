//! HTML form handlers
//!
//! Failures never surface as error statuses here: the page is rendered again
//! with an inline message, or the user is sent back to the listing.

use axum::{
    Form,
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use std::sync::Arc;

use super::views;
use crate::application::{
    CreateStockCommand, CreateStockUseCase, DeleteStockUseCase, GetStockUseCase,
    ListStocksUseCase, StockError, StockRepository, UpdateMode, UpdateStockCommand,
    UpdateStockUseCase,
};
use crate::domain::{RawStockFields, Stock, StockId};
use crate::presentation::AppState;

/// Fields posted by the add and edit forms
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StockForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub ticker: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
}

impl From<StockForm> for RawStockFields {
    fn from(form: StockForm) -> Self {
        RawStockFields {
            name: form.name,
            ticker: form.ticker,
            price: form.price,
        }
    }
}

/// Inline message shown above a form
fn error_text(err: &StockError) -> &'static str {
    match err {
        StockError::MissingField(_) => "All fields are required.",
        StockError::InvalidPrice(_) => "Invalid price.",
        StockError::DuplicateTicker(_) => "Ticker already exists.",
        StockError::NotFound(_) => "Stock not found.",
        StockError::StoreUnavailable(_) | StockError::Store(_) => "Could not save stock.",
    }
}

/// Stock shown in the edit form; a lookup failure degrades to "not found"
async fn find_stock<R: StockRepository>(state: &AppState<R>, id: StockId) -> Option<Stock> {
    GetStockUseCase::new(Arc::clone(&state.stock_repo))
        .execute(id)
        .await
        .ok()
}

/// GET /
pub async fn index<R: StockRepository>(State(state): State<Arc<AppState<R>>>) -> Html<String> {
    // Query failures are logged by the use case and render an empty table
    let stocks = ListStocksUseCase::new(Arc::clone(&state.stock_repo))
        .execute()
        .await
        .unwrap_or_default();

    Html(views::index_page(&stocks))
}

/// GET /add
pub async fn add_form() -> Html<String> {
    Html(views::add_page(None))
}

/// POST /add
pub async fn add_stock<R: StockRepository>(
    State(state): State<Arc<AppState<R>>>,
    Form(form): Form<StockForm>,
) -> Response {
    let use_case = CreateStockUseCase::new(Arc::clone(&state.stock_repo));

    match use_case
        .execute(CreateStockCommand {
            fields: form.into(),
        })
        .await
    {
        Ok(_) => Redirect::to("/").into_response(),
        Err(e) => Html(views::add_page(Some(error_text(&e)))).into_response(),
    }
}

/// GET /edit/{id}
pub async fn edit_form<R: StockRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<i64>,
) -> Html<String> {
    let id = StockId::new(id);
    let stock = find_stock(&state, id).await;
    Html(views::edit_page(id, stock.as_ref(), None))
}

/// POST /edit/{id}
pub async fn edit_stock<R: StockRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<i64>,
    Form(form): Form<StockForm>,
) -> Response {
    let id = StockId::new(id);
    let use_case = UpdateStockUseCase::new(Arc::clone(&state.stock_repo));

    let result = use_case
        .execute(UpdateStockCommand {
            id,
            fields: form.into(),
            mode: UpdateMode::Replace,
        })
        .await;

    match result {
        // A vanished row has nothing left to edit
        Ok(()) | Err(StockError::NotFound(_)) => Redirect::to("/").into_response(),
        Err(e) => {
            let stock = find_stock(&state, id).await;
            Html(views::edit_page(id, stock.as_ref(), Some(error_text(&e)))).into_response()
        }
    }
}

/// POST /delete/{id}
pub async fn delete_stock<R: StockRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<i64>,
) -> Redirect {
    let use_case = DeleteStockUseCase::new(Arc::clone(&state.stock_repo));

    // No not-found signal on this path; store failures are already logged
    if let Err(StockError::NotFound(id)) = use_case.execute(StockId::new(id)).await {
        tracing::debug!(%id, "Delete of unknown stock ignored");
    }
    Redirect::to("/")
}
