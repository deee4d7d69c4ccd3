//! 统一错误处理
//!
//! 错误类型定义在 `shared::error`，这里负责把仓储层错误
//! ([`RepoError`]) 映射到 API 错误。
//!
//! ```ignore
//! let table = repo
//!     .find_by_id(&id)
//!     .await?
//!     .ok_or_else(|| AppError::new(ErrorCode::TableNotFound))?;
//! ```

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

use crate::db::repository::RepoError;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Duplicate(msg) => AppError::conflict(msg),
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

/// Map a repository `NotFound` to a domain not-found code
///
/// ```ignore
/// repo.update(&id, payload).await.map_err(not_found_as(ErrorCode::TableNotFound))?;
/// ```
pub fn not_found_as(code: ErrorCode) -> impl Fn(RepoError) -> AppError {
    move |err| match err {
        RepoError::NotFound(_) => AppError::new(code),
        other => other.into(),
    }
}
