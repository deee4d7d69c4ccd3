//! Reports API Handlers

use axum::{
    Json,
    extract::{Query, State},
};

use crate::core::ServerState;
use crate::reports::ReportService;
use crate::utils::AppResult;
use shared::report::{ItemReport, ReportQuery, SalesReport, TableReport, WaiterReport};

fn service(state: &ServerState) -> ReportService {
    ReportService::new(state.get_db(), state.config.business_timezone)
}

/// GET /api/reports/sales - 营业额汇总 + 按日统计
pub async fn sales(
    State(state): State<ServerState>,
    Query(query): Query<ReportQuery>,
) -> AppResult<Json<SalesReport>> {
    Ok(Json(service(&state).sales(&query).await?))
}

/// GET /api/reports/items - 菜品销量排行
pub async fn items(
    State(state): State<ServerState>,
    Query(query): Query<ReportQuery>,
) -> AppResult<Json<ItemReport>> {
    Ok(Json(service(&state).items(&query).await?))
}

/// GET /api/reports/waiters - 服务员业绩
pub async fn waiters(
    State(state): State<ServerState>,
    Query(query): Query<ReportQuery>,
) -> AppResult<Json<WaiterReport>> {
    Ok(Json(service(&state).waiters(&query).await?))
}

/// GET /api/reports/tables - 桌台使用情况
pub async fn tables(
    State(state): State<ServerState>,
    Query(query): Query<ReportQuery>,
) -> AppResult<Json<TableReport>> {
    Ok(Json(service(&state).tables(&query).await?))
}
