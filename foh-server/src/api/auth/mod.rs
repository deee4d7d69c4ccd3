//! Authentication Routes
//!
//! - /api/auth/login, /api/auth/logout: public
//! - /api/auth/me: authenticated (global require_auth middleware)
//! - /api/auth/users: `users:manage`

mod handler;

use axum::{Router, middleware, routing::get, routing::post};

use crate::auth::{permissions, require_permission};
use crate::core::ServerState;

/// Build authentication router
pub fn router() -> Router<ServerState> {
    let user_routes = Router::new()
        .route("/api/auth/users", get(handler::list_users).post(handler::create_user))
        .layer(middleware::from_fn(require_permission(
            permissions::USERS_MANAGE,
        )));

    Router::new()
        .route("/api/auth/login", post(handler::login))
        .route("/api/auth/logout", post(handler::logout))
        .route("/api/auth/me", get(handler::me))
        .merge(user_routes)
}
