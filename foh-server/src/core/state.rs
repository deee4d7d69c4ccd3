use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::JwtService;
use crate::core::{Config, Result};
use crate::db::DbService;
use crate::db::repository::{NewUser, UserRepository};
use shared::models::UserRole;
use shared::util::now_millis;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc 实现浅拷贝，克隆成本极低。请求之间没有进程内可变状态，
/// 所有数据都在数据库中。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式数据库 |
/// | jwt_service | Arc<JwtService> | 会话令牌服务 |
///
/// ```ignore
/// let repo = MenuItemRepository::new(state.get_db());
/// ```
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
    /// 会话令牌服务 (Arc 共享所有权)
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    /// 使用已打开的数据库创建服务器状态
    ///
    /// 通常使用 [`initialize()`](Self::initialize) 方法代替；测试中直接传入临时库
    pub fn new(config: Config, db: Surreal<Db>) -> Self {
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        Self {
            config,
            db,
            jwt_service,
        }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构 (database/, logs/)
    /// 2. 数据库 (work_dir/database/foh.db) 并应用表定义
    /// 3. 首次启动时创建管理员
    pub async fn initialize(config: &Config) -> Result<Self> {
        std::fs::create_dir_all(config.database_dir())?;
        std::fs::create_dir_all(config.log_dir())?;

        let db_path = config.database_dir().join("foh.db");
        let db_service = DbService::new(&db_path.to_string_lossy()).await?;

        let state = Self::new(config.clone(), db_service.db);
        state.bootstrap_admin().await?;

        Ok(state)
    }

    /// 没有任何用户时，根据 ADMIN_* 配置创建管理员
    ///
    /// 返回是否创建了新账号
    pub async fn bootstrap_admin(&self) -> Result<bool> {
        let (Some(username), Some(password)) = (
            self.config.admin_username.clone(),
            self.config.admin_password.clone(),
        ) else {
            return Ok(false);
        };

        let repo = UserRepository::new(self.get_db());
        if repo.count().await? > 0 {
            return Ok(false);
        }

        if let Err(e) = crate::utils::validation::validate_password(&password) {
            tracing::error!(username = %username, "Bootstrap admin skipped: {}", e.message);
            return Ok(false);
        }

        let name = self
            .config
            .admin_name
            .clone()
            .unwrap_or_else(|| "Administrator".to_string());

        let user = repo
            .create(NewUser {
                username,
                password,
                name,
                role: UserRole::Admin,
                now: now_millis(),
            })
            .await?;

        tracing::info!(username = %user.username, "Bootstrap admin account created");
        Ok(true)
    }

    /// 获取数据库实例
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    /// 获取会话令牌服务
    pub fn get_jwt_service(&self) -> &JwtService {
        &self.jwt_service
    }
}
