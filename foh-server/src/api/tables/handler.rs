//! Dining Table API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use axum_extra::extract::WithRejection;

use crate::core::ServerState;
use crate::db::models::{DiningTable, Order};
use crate::db::repository::{DiningTableRepository, RepoError};
use crate::orders::{OrderService, rules};
use crate::utils::validation::{validate_coordinate, validate_min};
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode, not_found_as};
use shared::models::{DiningTableCreate, DiningTableUpdate, StatusUpdate};

fn map_repo_error(err: RepoError) -> AppError {
    match err {
        RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::TableNumberExists, msg),
        other => not_found_as(ErrorCode::TableNotFound)(other),
    }
}

async fn find_table(repo: &DiningTableRepository, id: &str) -> AppResult<DiningTable> {
    repo.find_by_id(id)
        .await
        .map_err(map_repo_error)?
        .ok_or_else(|| AppError::new(ErrorCode::TableNotFound))
}

/// GET /api/tables - 获取所有桌台 (按桌号排序)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<DiningTable>>> {
    let repo = DiningTableRepository::new(state.get_db());
    Ok(Json(repo.find_all().await?))
}

/// GET /api/tables/:id - 获取单个桌台
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DiningTable>> {
    let repo = DiningTableRepository::new(state.get_db());
    Ok(Json(find_table(&repo, &id).await?))
}

/// POST /api/tables - 创建桌台
pub async fn create(
    State(state): State<ServerState>,
    WithRejection(Json(payload), _): WithRejection<Json<DiningTableCreate>, AppError>,
) -> AppResult<(StatusCode, Json<DiningTable>)> {
    validate_min(payload.number, "number", 1)?;
    validate_min(payload.seats, "seats", 1)?;
    validate_coordinate(payload.position_x, "position_x")?;
    validate_coordinate(payload.position_y, "position_y")?;

    let repo = DiningTableRepository::new(state.get_db());
    let table = repo.create(payload).await.map_err(map_repo_error)?;

    tracing::info!(number = table.number, seats = table.seats, "Dining table created");
    Ok((StatusCode::CREATED, Json(table)))
}

/// PUT /api/tables/:id - 更新桌台 (仅更新提供的字段)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    WithRejection(Json(payload), _): WithRejection<Json<DiningTableUpdate>, AppError>,
) -> AppResult<Json<DiningTable>> {
    if let Some(number) = payload.number {
        validate_min(number, "number", 1)?;
    }
    if let Some(seats) = payload.seats {
        validate_min(seats, "seats", 1)?;
    }
    validate_coordinate(payload.position_x, "position_x")?;
    validate_coordinate(payload.position_y, "position_y")?;

    let repo = DiningTableRepository::new(state.get_db());
    let table = repo.update(&id, payload).await.map_err(map_repo_error)?;
    Ok(Json(table))
}

/// DELETE /api/tables/:id - 删除桌台
///
/// 桌台仍有进行中订单时返回 409
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<()>> {
    let repo = DiningTableRepository::new(state.get_db());
    let table = find_table(&repo, &id).await?;
    let thing = table
        .id
        .ok_or_else(|| AppError::new(ErrorCode::TableNotFound))?;

    let active = OrderService::new(state.get_db())
        .active_count_for_table(&thing)
        .await?;
    if active > 0 {
        return Err(AppError::new(ErrorCode::TableHasOrders).with_detail("active_orders", active));
    }

    repo.delete(&thing).await?;

    tracing::info!(table_id = %thing, number = table.number, "Dining table deleted");
    Ok(ApiResponse::ok("Table deleted successfully"))
}

/// PATCH /api/tables/:id/status - 修改桌台状态
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    WithRejection(Json(payload), _): WithRejection<Json<StatusUpdate>, AppError>,
) -> AppResult<Json<DiningTable>> {
    let status = rules::parse_table_status(&payload.status)?;

    let repo = DiningTableRepository::new(state.get_db());
    let table = find_table(&repo, &id).await?;
    let thing = table
        .id
        .ok_or_else(|| AppError::new(ErrorCode::TableNotFound))?;

    let updated = repo.set_status(&thing, status).await.map_err(map_repo_error)?;
    Ok(Json(updated))
}

/// GET /api/tables/:id/orders - 桌台进行中的订单 (最新在前)
pub async fn list_orders(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Order>>> {
    let orders = OrderService::new(state.get_db())
        .active_for_table(&id)
        .await?;
    Ok(Json(orders))
}
