//! Menu API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use axum_extra::extract::WithRejection;

use crate::core::ServerState;
use crate::db::models::MenuItem;
use crate::db::repository::MenuItemRepository;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_URL_LEN, validate_min, validate_optional_text, validate_price,
    validate_required_text,
};
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode, not_found_as};
use shared::models::{AvailabilityUpdate, MenuCategory, MenuItemCreate, MenuItemUpdate};
use shared::util::now_millis;

fn validate_create(payload: &MenuItemCreate) -> AppResult<()> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&Some(payload.description.clone()), "description", MAX_NOTE_LEN)?;
    validate_price(payload.price)?;
    if let Some(minutes) = payload.preparation_time {
        validate_min(minutes, "preparation_time", 0)?;
    }
    validate_optional_text(&payload.image, "image", MAX_URL_LEN)?;
    Ok(())
}

fn validate_update(payload: &MenuItemUpdate) -> AppResult<()> {
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;
    if let Some(price) = payload.price {
        validate_price(price)?;
    }
    if let Some(minutes) = payload.preparation_time {
        validate_min(minutes, "preparation_time", 0)?;
    }
    validate_optional_text(&payload.image, "image", MAX_URL_LEN)?;
    Ok(())
}

/// GET /api/menu - 获取全部菜品
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuItem>>> {
    let repo = MenuItemRepository::new(state.get_db());
    Ok(Json(repo.find_all().await?))
}

/// GET /api/menu/category/:category - 按分类获取菜品
pub async fn list_by_category(
    State(state): State<ServerState>,
    Path(category): Path<String>,
) -> AppResult<Json<Vec<MenuItem>>> {
    let category: MenuCategory = category.parse().map_err(|_| {
        AppError::new(ErrorCode::MenuInvalidCategory).with_detail("category", category.clone())
    })?;

    let repo = MenuItemRepository::new(state.get_db());
    Ok(Json(repo.find_by_category(category).await?))
}

/// GET /api/menu/:id - 获取单个菜品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MenuItem>> {
    let repo = MenuItemRepository::new(state.get_db());
    let item = repo
        .find_by_id(&id)
        .await
        .map_err(not_found_as(ErrorCode::MenuItemNotFound))?
        .ok_or_else(|| AppError::new(ErrorCode::MenuItemNotFound))?;
    Ok(Json(item))
}

/// POST /api/menu - 创建菜品
pub async fn create(
    State(state): State<ServerState>,
    WithRejection(Json(payload), _): WithRejection<Json<MenuItemCreate>, AppError>,
) -> AppResult<(StatusCode, Json<MenuItem>)> {
    validate_create(&payload)?;

    let repo = MenuItemRepository::new(state.get_db());
    let item = repo.create(payload, now_millis()).await?;

    tracing::info!(name = %item.name, price = item.price, "Menu item created");
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /api/menu/:id - 更新菜品 (仅更新提供的字段)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    WithRejection(Json(payload), _): WithRejection<Json<MenuItemUpdate>, AppError>,
) -> AppResult<Json<MenuItem>> {
    validate_update(&payload)?;

    let repo = MenuItemRepository::new(state.get_db());
    let item = repo
        .update(&id, payload)
        .await
        .map_err(not_found_as(ErrorCode::MenuItemNotFound))?;
    Ok(Json(item))
}

/// DELETE /api/menu/:id - 删除菜品
///
/// 已下单的菜品保留名称和价格快照
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<()>> {
    let repo = MenuItemRepository::new(state.get_db());
    let deleted = repo
        .delete(&id)
        .await
        .map_err(not_found_as(ErrorCode::MenuItemNotFound))?;
    if !deleted {
        return Err(AppError::new(ErrorCode::MenuItemNotFound));
    }

    tracing::info!(menu_item_id = %id, "Menu item deleted");
    Ok(ApiResponse::ok("Menu item deleted successfully"))
}

/// PATCH /api/menu/:id/availability - 切换菜品可售状态
///
/// `is_available` 必须是 JSON 布尔值
pub async fn set_availability(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    WithRejection(Json(payload), _): WithRejection<Json<AvailabilityUpdate>, AppError>,
) -> AppResult<Json<MenuItem>> {
    let is_available = payload.value().ok_or_else(|| {
        AppError::validation("is_available must be a boolean").with_detail("field", "is_available")
    })?;

    let repo = MenuItemRepository::new(state.get_db());
    let item = repo
        .set_availability(&id, is_available)
        .await
        .map_err(not_found_as(ErrorCode::MenuItemNotFound))?;

    tracing::info!(menu_item_id = %id, is_available, "Menu item availability changed");
    Ok(Json(item))
}
