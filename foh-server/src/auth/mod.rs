//! 认证授权模块
//!
//! 提供会话令牌、权限管理和中间件：
//! - [`JwtService`] - 会话令牌 (HS256 JWT) 服务
//! - [`CurrentUser`] - 当前用户上下文
//! - [`require_auth`] - 认证中间件
//! - [`require_permission`] - 权限检查中间件
//!
//! 令牌通过 HttpOnly cookie ([`SESSION_COOKIE`]) 或 `Authorization: Bearer` 头传递。

pub mod extractor;
pub mod jwt;
pub mod middleware;
pub mod permissions;

pub use extractor::{SESSION_COOKIE, clear_session_cookie, extract_token, session_cookie};
pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::{CurrentUserExt, require_auth, require_permission};
