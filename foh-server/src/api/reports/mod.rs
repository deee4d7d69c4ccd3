//! Reports API 模块
//!
//! 所有报表路由都需要 `reports:view` 权限，查询参数为
//! `start` / `end` (YYYY-MM-DD，营业时区)

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::{permissions, require_permission};
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/reports", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/sales", get(handler::sales))
        .route("/items", get(handler::items))
        .route("/waiters", get(handler::waiters))
        .route("/tables", get(handler::tables))
        .layer(middleware::from_fn(require_permission(
            permissions::REPORTS_VIEW,
        )))
}
