//! Order API Module
//!
//! 所有订单接口只需登录；厨房视图需要 `kitchen:view`。
//! 状态联动规则见 [`crate::orders::rules`]。

mod handler;

use axum::{
    Router, middleware,
    routing::{delete, get, patch, post},
};

use crate::auth::{permissions, require_permission};
use crate::core::ServerState;

/// Order router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", routes())
}

fn routes() -> Router<ServerState> {
    let order_routes = Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/status", patch(handler::update_status))
        .route("/{id}/items", post(handler::add_items))
        .route("/{id}/items/{item_id}", delete(handler::remove_item))
        .route("/{id}/items/{item_id}/status", patch(handler::update_item_status));

    let kitchen_routes = Router::new()
        .route("/kitchen/active", get(handler::kitchen_active))
        .layer(middleware::from_fn(require_permission(
            permissions::KITCHEN_VIEW,
        )));

    order_routes.merge(kitchen_routes)
}
