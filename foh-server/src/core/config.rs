use std::path::PathBuf;

use chrono_tz::Tz;

use crate::auth::{JwtConfig, JwtError};
use crate::utils::time::parse_timezone;

/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录 (数据库、日志) |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | BUSINESS_TIMEZONE | UTC | 报表按营业时区切分日期 |
/// | SESSION_MAX_AGE_DAYS | 14 | 会话 cookie 与令牌有效期 |
/// | JWT_SECRET | (开发环境自动生成) | 至少 32 字符 |
/// | ADMIN_USERNAME / ADMIN_PASSWORD / ADMIN_NAME | - | 首次启动时创建管理员 |
/// | REQUEST_TIMEOUT_MS | 30000 | 请求超时(毫秒) |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/srv/foh HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储数据库和日志
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 日志级别 (RUST_LOG 优先)
    pub log_level: String,
    /// 营业时区
    pub business_timezone: Tz,
    /// 会话有效期 (天)
    pub session_max_age_days: i64,
    /// JWT 认证配置
    pub jwt: JwtConfig,
    /// 初始管理员 (仅在没有任何用户时创建)
    pub admin_username: Option<String>,
    pub admin_password: Option<String>,
    pub admin_name: Option<String>,
    /// 请求超时时间 (毫秒)
    pub request_timeout_ms: u64,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值; 仅 JWT 密钥配置错误会失败
    pub fn from_env() -> Result<Self, JwtError> {
        let session_max_age_days = std::env::var("SESSION_MAX_AGE_DAYS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|d: &i64| *d > 0)
            .unwrap_or(14);

        Ok(Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            business_timezone: parse_timezone(
                &std::env::var("BUSINESS_TIMEZONE").unwrap_or_else(|_| "UTC".into()),
            ),
            session_max_age_days,
            jwt: JwtConfig::from_env(session_max_age_days)?,
            admin_username: non_empty_var("ADMIN_USERNAME"),
            admin_password: non_empty_var("ADMIN_PASSWORD"),
            admin_name: non_empty_var("ADMIN_NAME"),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
        })
    }

    /// 不读取环境变量的配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16, jwt: JwtConfig) -> Self {
        Self {
            work_dir: work_dir.into(),
            http_port,
            environment: "test".into(),
            log_level: "info".into(),
            business_timezone: Tz::UTC,
            session_max_age_days: 14,
            jwt,
            admin_username: None,
            admin_password: None,
            admin_name: None,
            request_timeout_ms: 30000,
        }
    }

    /// 数据库目录
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// 日志目录
    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
