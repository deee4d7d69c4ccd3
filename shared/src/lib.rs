//! Shared types for the front-of-house service
//!
//! Wire types used by the server and by any API client: domain enums,
//! request/response DTOs, report shapes and the unified error system.

pub mod client;
pub mod error;
pub mod models;
pub mod report;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
