//! Authentication Handlers
//!
//! Handles login, logout, the current session and staff accounts

use std::time::Duration;

use axum::{Extension, Json, extract::State, http::StatusCode};
use axum_extra::extract::{WithRejection, cookie::CookieJar};

use crate::auth::{CurrentUser, clear_session_cookie, permissions, session_cookie};
use crate::core::ServerState;
use crate::db::models::User;
use crate::db::repository::{NewUser, RepoError, UserRepository};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_password, validate_required_text,
};
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode};
use crate::security_log;

use shared::client::{
    CurrentUserResponse, LoginRequest, LoginResponse, UserCreatedResponse, UserInfo,
};
use shared::models::UserCreate;
use shared::util::now_millis;

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

fn user_info(user: &User) -> UserInfo {
    UserInfo {
        id: user.id_string(),
        username: user.username.clone(),
        name: user.name.clone(),
        role: user.role,
        permissions: permissions::role_permissions(user.role),
    }
}

/// Login handler
///
/// Verifies credentials, sets the HttpOnly session cookie and returns the
/// same token in the body
pub async fn login(
    State(state): State<ServerState>,
    jar: CookieJar,
    WithRejection(Json(req), _): WithRejection<Json<LoginRequest>, AppError>,
) -> Result<(CookieJar, Json<LoginResponse>), AppError> {
    let username = req.username.trim().to_string();
    let repo = UserRepository::new(state.get_db());
    let user = repo.find_by_username(&username).await?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // Unified error message to prevent username enumeration
    let user = match user {
        Some(u) => {
            let password_valid = u
                .verify_password(&req.password)
                .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))?;

            if !password_valid {
                security_log!("WARN", "login_failed", username = username.clone(), reason = "invalid_password");
                return Err(AppError::invalid_credentials());
            }
            u
        }
        None => {
            security_log!("WARN", "login_failed", username = username.clone(), reason = "user_not_found");
            return Err(AppError::invalid_credentials());
        }
    };

    let info = user_info(&user);
    let jwt_service = state.get_jwt_service();
    let token = jwt_service
        .generate_token(&info.id, &info.username, &info.name, info.role, &info.permissions)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    tracing::info!(
        user_id = %info.id,
        username = %info.username,
        role = %info.role,
        "User logged in successfully"
    );

    let jar = jar.add(session_cookie(
        token.clone(),
        jwt_service.session_max_age_seconds(),
    ));

    Ok((
        jar,
        Json(LoginResponse {
            message: "Login successful".to_string(),
            token,
            user: info,
        }),
    ))
}

/// Logout handler - clears the session cookie
pub async fn logout(jar: CookieJar) -> (CookieJar, ApiResponse<()>) {
    (
        jar.remove(clear_session_cookie()),
        ApiResponse::ok("Logged out successfully"),
    )
}

/// Get current user info
pub async fn me(Extension(user): Extension<CurrentUser>) -> Json<CurrentUserResponse> {
    Json(CurrentUserResponse {
        user: user.to_user_info(),
    })
}

/// GET /api/auth/users - 员工列表 (不含密码)
pub async fn list_users(State(state): State<ServerState>) -> AppResult<Json<Vec<User>>> {
    let repo = UserRepository::new(state.get_db());
    Ok(Json(repo.find_all().await?))
}

/// POST /api/auth/users - 创建员工账号
pub async fn create_user(
    State(state): State<ServerState>,
    Extension(admin): Extension<CurrentUser>,
    WithRejection(Json(payload), _): WithRejection<Json<UserCreate>, AppError>,
) -> AppResult<(StatusCode, Json<UserCreatedResponse>)> {
    let username = payload.username.trim().to_string();
    validate_required_text(&username, "username", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_password(&payload.password)?;

    let repo = UserRepository::new(state.get_db());
    let user = repo
        .create(NewUser {
            username,
            password: payload.password,
            name: payload.name,
            role: payload.role.unwrap_or_default(),
            now: now_millis(),
        })
        .await
        .map_err(|e| match e {
            RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::UsernameExists, msg),
            other => other.into(),
        })?;

    tracing::info!(
        username = %user.username,
        role = %user.role,
        created_by = %admin.username,
        "User created"
    );

    Ok((
        StatusCode::CREATED,
        Json(UserCreatedResponse {
            message: "User created successfully".to_string(),
            user: user_info(&user),
        }),
    ))
}
