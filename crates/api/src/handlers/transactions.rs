use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use db::repository::transactions as tx_repo;
use db::{NewTransaction, TransactionRow};
use super::AppState;
use crate::error::{ApiError, JsonFromRequest};

#[derive(serde::Deserialize)]
pub struct TransactionDto {
    pub description: String,
    pub amount: f64,
}

impl From<TransactionDto> for NewTransaction {
    fn from(dto: TransactionDto) -> Self {
        NewTransaction::new(dto.description, dto.amount)
    }
}

#[derive(serde::Deserialize)]
pub struct ListTransactionsFilter {
    pub description: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<ListTransactionsFilter>,
) -> Result<Json<Vec<TransactionRow>>, ApiError> {
    let rows = match filter.description {
        Some(description) => tx_repo::find_by_description(&state.pool, &description).await?,
        None => tx_repo::list_transactions(&state.pool).await?,
    };
    Ok(Json(rows))
}

pub async fn get(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<TransactionRow>, ApiError> {
    let row = tx_repo::get_transaction(&state.pool, id).await?;
    Ok(Json(row))
}

pub async fn create(
    State(state): State<AppState>,
    JsonFromRequest(payload): JsonFromRequest<TransactionDto>,
) -> Result<(StatusCode, Json<TransactionRow>), ApiError> {
    let row = tx_repo::create_transaction(&state.pool, &payload.into()).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

pub async fn update(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    JsonFromRequest(payload): JsonFromRequest<TransactionDto>,
) -> Result<Json<TransactionRow>, ApiError> {
    let row = tx_repo::update_transaction(&state.pool, id, &payload.into()).await?;
    Ok(Json(row))
}

pub async fn delete(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    tx_repo::delete_transaction(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
