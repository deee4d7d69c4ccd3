//! Client-related types shared between server and client
//!
//! Request/response DTOs for the auth API.

use crate::models::UserRole;
use serde::{Deserialize, Serialize};

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    /// Same value as the session cookie, for clients that send `Authorization: Bearer`
    pub token: String,
    pub user: UserInfo,
}

/// User information carried by the session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub name: String,
    pub role: UserRole,
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// `GET /api/auth/me` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUserResponse {
    pub user: UserInfo,
}

/// `GET /api/health` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// `POST /api/auth/users` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreatedResponse {
    pub message: String,
    pub user: UserInfo,
}
