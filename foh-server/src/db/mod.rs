//! Database Module
//!
//! Embedded SurrealDB (RocksDB engine). Schema definitions are idempotent
//! and applied every time the service opens the store.

pub mod models;
pub mod repository;

use crate::utils::AppError;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

pub const NAMESPACE: &str = "foh";
pub const DATABASE: &str = "main";

/// Tables and unique indexes
///
/// Tables stay schemaless; uniqueness is enforced by the indexes and also
/// checked up front by the repositories so callers get a clear conflict.
const SCHEMA: &str = r#"
    DEFINE TABLE IF NOT EXISTS menu_item SCHEMALESS;
    DEFINE INDEX IF NOT EXISTS menu_item_category ON menu_item FIELDS category;

    DEFINE TABLE IF NOT EXISTS dining_table SCHEMALESS;
    DEFINE INDEX IF NOT EXISTS dining_table_number ON dining_table FIELDS number UNIQUE;

    DEFINE TABLE IF NOT EXISTS order SCHEMALESS;
    DEFINE INDEX IF NOT EXISTS order_status ON order FIELDS status;
    DEFINE INDEX IF NOT EXISTS order_table ON order FIELDS table_id;

    DEFINE TABLE IF NOT EXISTS user SCHEMALESS;
    DEFINE INDEX IF NOT EXISTS user_username ON user FIELDS username UNIQUE;
"#;

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the database at `db_path` and apply the schema
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        tracing::info!(path = %db_path, "Database connection established (SurrealDB RocksDB)");

        apply_schema(&db).await?;
        tracing::info!("Database schema applied");

        Ok(Self { db })
    }
}

/// Apply table and index definitions
pub async fn apply_schema(db: &Surreal<Db>) -> Result<(), AppError> {
    db.query(SCHEMA)
        .await
        .and_then(|response| response.check())
        .map_err(|e| AppError::database(format!("Failed to apply schema: {e}")))?;
    Ok(())
}
