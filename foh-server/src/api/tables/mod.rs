//! Dining Table API 模块
//!
//! 读取和状态变更只需登录；增删改需要 `tables:manage`。

mod handler;

use axum::{
    Router, middleware,
    routing::{get, patch, post, put},
};

use crate::auth::{permissions, require_permission};
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/tables", routes())
}

fn routes() -> Router<ServerState> {
    let read_routes = Router::new()
        .route("/", get(handler::list))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/orders", get(handler::list_orders))
        .route("/{id}/status", patch(handler::update_status));

    let manage_routes = Router::new()
        .route("/", post(handler::create))
        .route("/{id}", put(handler::update).delete(handler::delete))
        .layer(middleware::from_fn(require_permission(
            permissions::TABLES_MANAGE,
        )));

    read_routes.merge(manage_routes)
}
