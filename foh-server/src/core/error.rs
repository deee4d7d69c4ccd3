//! 服务器启动和运行错误
//!
//! 请求级错误使用 [`crate::AppError`]，这里只覆盖进程级失败。

use thiserror::Error;

use crate::AppError;
use crate::auth::JwtError;
use crate::db::repository::RepoError;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] JwtError),

    #[error("Database error: {0}")]
    Database(#[from] AppError),

    #[error("Bootstrap failed: {0}")]
    Bootstrap(#[from] RepoError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// 进程级 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
