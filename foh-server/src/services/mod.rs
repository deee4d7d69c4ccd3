//! 服务层 - HTTP 服务器
//!
//! - [`HttpService`] - 路由组装、中间件和监听

pub mod https;

pub use https::{HttpService, build_app};
