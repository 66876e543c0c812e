use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use std::sync::Arc;

use crate::application::{
    CreateStockCommand, CreateStockUseCase, DeleteStockUseCase, GetStockUseCase,
    ListStocksUseCase, StockRepository, UpdateMode, UpdateStockCommand, UpdateStockUseCase,
};
use crate::domain::{Stock, StockId};
use crate::presentation::AppState;
use crate::presentation::rest::{ApiError, dto::*};

/// GET /api/stocks
pub async fn list_stocks<R: StockRepository>(
    State(state): State<Arc<AppState<R>>>,
) -> Result<Json<Vec<Stock>>, ApiError> {
    let use_case = ListStocksUseCase::new(Arc::clone(&state.stock_repo));
    let stocks = use_case.execute().await?;
    Ok(Json(stocks))
}

/// POST /api/stocks
pub async fn create_stock<R: StockRepository>(
    State(state): State<Arc<AppState<R>>>,
    payload: Result<Json<StockRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let Json(req) = payload?;
    let use_case = CreateStockUseCase::new(Arc::clone(&state.stock_repo));

    let stock = use_case
        .execute(CreateStockCommand { fields: req.into() })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Stock created").with_id(stock.id)),
    ))
}

/// GET /api/stocks/{id}
pub async fn get_stock<R: StockRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<i64>,
) -> Result<Json<Stock>, ApiError> {
    let use_case = GetStockUseCase::new(Arc::clone(&state.stock_repo));
    let stock = use_case.execute(StockId::new(id)).await?;
    Ok(Json(stock))
}

/// PUT /api/stocks/{id} - any subset of name, ticker, price
pub async fn update_stock<R: StockRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<i64>,
    payload: Result<Json<StockRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(req) = payload?;
    let use_case = UpdateStockUseCase::new(Arc::clone(&state.stock_repo));

    use_case
        .execute(UpdateStockCommand {
            id: StockId::new(id),
            fields: req.into(),
            mode: UpdateMode::Patch,
        })
        .await?;

    Ok(Json(MessageResponse::new("Stock updated")))
}

/// DELETE /api/stocks/{id}
pub async fn delete_stock<R: StockRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let use_case = DeleteStockUseCase::new(Arc::clone(&state.stock_repo));
    use_case.execute(StockId::new(id)).await?;
    Ok(Json(MessageResponse::new("Stock deleted")))
}
