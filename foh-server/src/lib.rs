//! FOH Server - 餐厅前厅服务 (菜单、桌台、订单、厨房队列、报表)
//!
//! # 架构概述
//!
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储
//! - **认证** (`auth`): JWT (Cookie / Bearer) + Argon2 认证体系
//! - **订单** (`orders`): 订单生命周期、金额计算、桌台状态联动
//! - **报表** (`reports`): 按营业时区汇总的销售报表
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! foh-server/src/
//! ├── core/          # 配置、状态、错误
//! ├── auth/          # JWT 认证、权限
//! ├── services/      # HTTP 服务
//! ├── api/           # HTTP 路由和处理器
//! ├── utils/         # 工具函数
//! ├── db/            # 数据库层
//! ├── orders/        # 订单业务规则
//! └── reports/       # 报表聚合
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod orders;
pub mod reports;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use orders::OrderService;
pub use reports::ReportService;
pub use services::HttpService;
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// 加载 `.env`，创建工作目录并初始化日志
pub fn setup_environment() -> std::io::Result<()> {
    let _ = dotenv::dotenv();

    let work_dir = std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into());
    let log_dir = std::path::Path::new(&work_dir).join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_level = std::env::var("LOG_LEVEL").ok();
    let json = std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));
    init_logger_with_file(log_level.as_deref(), json, log_dir.to_str());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ______ ____  __  __
   / ____// __ \/ / / /
  / /_   / / / / /_/ /
 / __/  / /_/ / __  /
/_/     \____/_/ /_/
        front of house
    "#
    );
}
