//! Menu API 模块
//!
//! | 路径 | 方法 | 权限 |
//! |------|------|------|
//! | /api/menu | GET | 公开 |
//! | /api/menu/category/{category} | GET | 公开 |
//! | /api/menu/{id} | GET | 公开 |
//! | /api/menu | POST | menu:manage |
//! | /api/menu/{id} | PUT, DELETE | menu:manage |
//! | /api/menu/{id}/availability | PATCH | menu:availability |

mod handler;

use axum::{
    Router, middleware,
    routing::{get, patch, post, put},
};

use crate::auth::{permissions, require_permission};
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/menu", routes())
}

fn routes() -> Router<ServerState> {
    let read_routes = Router::new()
        .route("/", get(handler::list))
        .route("/category/{category}", get(handler::list_by_category))
        .route("/{id}", get(handler::get_by_id));

    let manage_routes = Router::new()
        .route("/", post(handler::create))
        .route("/{id}", put(handler::update).delete(handler::delete))
        .layer(middleware::from_fn(require_permission(
            permissions::MENU_MANAGE,
        )));

    let availability_routes = Router::new()
        .route("/{id}/availability", patch(handler::set_availability))
        .layer(middleware::from_fn(require_permission(
            permissions::MENU_AVAILABILITY,
        )));

    read_routes.merge(manage_routes).merge(availability_routes)
}
