//! Repository Module
//!
//! CRUD access to the SurrealDB tables. Repositories return [`RepoError`];
//! handlers and services convert it into `AppError`.

pub mod dining_table;
pub mod menu_item;
pub mod order;
pub mod user;

// Re-exports
pub use dining_table::DiningTableRepository;
pub use menu_item::MenuItemRepository;
pub use order::{NewOrder, OrderFilter, OrderRepository};
pub use user::{NewUser, UserRepository};

use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: API 统一使用 "table:id" 格式，也接受不带表名的 key
// =============================================================================
//
//   - "dining_table:abc" -> RecordId(dining_table, abc)
//   - "abc"              -> RecordId(dining_table, abc)
//   - "user:abc" on the tables endpoint -> NotFound

/// Parse a path/body id into a RecordId of the expected table
pub fn parse_record_id(table: &str, raw: &str) -> RepoResult<RecordId> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(RepoError::Validation("ID must not be empty".to_string()));
    }

    if !raw.contains(':') {
        return Ok(RecordId::from_table_key(table, raw));
    }

    let id: RecordId = raw
        .parse()
        .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", raw)))?;
    if id.table() != table {
        return Err(RepoError::NotFound(format!("{} not found", raw)));
    }
    Ok(id)
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
