//! Order API Handlers

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use axum_extra::extract::WithRejection;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::Order;
use crate::orders::OrderService;
use crate::utils::{AppError, AppResult};
use shared::models::{OrderAddItems, OrderCreate, OrderQuery, StatusUpdate};

/// GET /api/orders - 订单列表 (可按 status / table 过滤，最新在前)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<OrderQuery>,
) -> AppResult<Json<Vec<Order>>> {
    let orders = OrderService::new(state.get_db()).list(query).await?;
    Ok(Json(orders))
}

/// GET /api/orders/:id - 获取单个订单
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let order = OrderService::new(state.get_db()).get(&id).await?;
    Ok(Json(order))
}

/// POST /api/orders - 开单
///
/// 服务员为当前登录用户；桌台随之变为 occupied
pub async fn create(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    WithRejection(Json(payload), _): WithRejection<Json<OrderCreate>, AppError>,
) -> AppResult<(StatusCode, Json<Order>)> {
    let order = OrderService::new(state.get_db())
        .create(payload, &user)
        .await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// PATCH /api/orders/:id/status - 修改订单状态
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    WithRejection(Json(payload), _): WithRejection<Json<StatusUpdate>, AppError>,
) -> AppResult<Json<Order>> {
    let order = OrderService::new(state.get_db())
        .update_status(&id, &payload.status)
        .await?;
    Ok(Json(order))
}

/// PATCH /api/orders/:id/items/:item_id/status - 修改菜品制作状态
pub async fn update_item_status(
    State(state): State<ServerState>,
    Path((id, item_id)): Path<(String, String)>,
    WithRejection(Json(payload), _): WithRejection<Json<StatusUpdate>, AppError>,
) -> AppResult<Json<Order>> {
    let order = OrderService::new(state.get_db())
        .update_item_status(&id, &item_id, &payload.status)
        .await?;
    Ok(Json(order))
}

/// POST /api/orders/:id/items - 加菜
pub async fn add_items(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    WithRejection(Json(payload), _): WithRejection<Json<OrderAddItems>, AppError>,
) -> AppResult<Json<Order>> {
    let order = OrderService::new(state.get_db())
        .add_items(&id, &payload.items)
        .await?;
    Ok(Json(order))
}

/// DELETE /api/orders/:id/items/:item_id - 删除菜品
pub async fn remove_item(
    State(state): State<ServerState>,
    Path((id, item_id)): Path<(String, String)>,
) -> AppResult<Json<Order>> {
    let order = OrderService::new(state.get_db())
        .remove_item(&id, &item_id)
        .await?;
    Ok(Json(order))
}

/// GET /api/orders/kitchen/active - 厨房待制作订单 (最早在前)
pub async fn kitchen_active(State(state): State<ServerState>) -> AppResult<Json<Vec<Order>>> {
    let orders = OrderService::new(state.get_db()).kitchen_orders().await?;
    Ok(Json(orders))
}
