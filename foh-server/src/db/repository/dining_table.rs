//! Dining Table Repository

use super::{BaseRepository, RepoError, RepoResult, parse_record_id};
use crate::db::models::DiningTable;
use shared::models::{DiningTableCreate, DiningTableUpdate, TableStatus};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

pub const TABLE: &str = "dining_table";

#[derive(Clone)]
pub struct DiningTableRepository {
    base: BaseRepository,
}

impl DiningTableRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all dining tables ordered by number
    pub async fn find_all(&self) -> RepoResult<Vec<DiningTable>> {
        let tables: Vec<DiningTable> = self
            .base
            .db()
            .query("SELECT * FROM dining_table ORDER BY number")
            .await?
            .take(0)?;
        Ok(tables)
    }

    /// Find table by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<DiningTable>> {
        let thing = parse_record_id(TABLE, id)?;
        self.find_by_record_id(thing).await
    }

    pub async fn find_by_record_id(&self, thing: RecordId) -> RepoResult<Option<DiningTable>> {
        let table: Option<DiningTable> = self.base.db().select(thing).await?;
        Ok(table)
    }

    /// Find table by its number
    pub async fn find_by_number(&self, number: i64) -> RepoResult<Option<DiningTable>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM dining_table WHERE number = $number LIMIT 1")
            .bind(("number", number))
            .await?;
        let tables: Vec<DiningTable> = result.take(0)?;
        Ok(tables.into_iter().next())
    }

    /// Create a new dining table
    pub async fn create(&self, data: DiningTableCreate) -> RepoResult<DiningTable> {
        if self.find_by_number(data.number).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Table number {} already exists",
                data.number
            )));
        }

        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE dining_table SET
                    number = $number,
                    seats = $seats,
                    status = $status,
                    location = $location,
                    position_x = $position_x,
                    position_y = $position_y
                RETURN AFTER"#,
            )
            .bind(("number", data.number))
            .bind(("seats", data.seats))
            .bind(("status", data.status.unwrap_or_default()))
            .bind(("location", data.location.unwrap_or_default()))
            .bind(("position_x", data.position_x.unwrap_or(0.0)))
            .bind(("position_y", data.position_y.unwrap_or(0.0)))
            .await?;

        let created: Option<DiningTable> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create dining table".to_string()))
    }

    /// Update a dining table; absent fields keep their stored value
    pub async fn update(&self, id: &str, data: DiningTableUpdate) -> RepoResult<DiningTable> {
        let thing = parse_record_id(TABLE, id)?;
        let existing = self
            .find_by_record_id(thing.clone())
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Dining table {} not found", id)))?;

        // Check duplicate number if changing
        if let Some(number) = data.number
            && number != existing.number
            && self.find_by_number(number).await?.is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Table number {} already exists",
                number
            )));
        }

        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $thing SET
                    number = $number,
                    seats = $seats,
                    status = $status,
                    location = $location,
                    position_x = $position_x,
                    position_y = $position_y
                RETURN AFTER"#,
            )
            .bind(("thing", thing))
            .bind(("number", data.number.unwrap_or(existing.number)))
            .bind(("seats", data.seats.unwrap_or(existing.seats)))
            .bind(("status", data.status.unwrap_or(existing.status)))
            .bind(("location", data.location.unwrap_or(existing.location)))
            .bind(("position_x", data.position_x.unwrap_or(existing.position_x)))
            .bind(("position_y", data.position_y.unwrap_or(existing.position_y)))
            .await?;

        result
            .take::<Option<DiningTable>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Dining table {} not found", id)))
    }

    /// Set table status only
    pub async fn set_status(&self, thing: &RecordId, status: TableStatus) -> RepoResult<DiningTable> {
        let mut result = self
            .base
            .db()
            .query("UPDATE $thing SET status = $status RETURN AFTER")
            .bind(("thing", thing.clone()))
            .bind(("status", status))
            .await?;

        result
            .take::<Option<DiningTable>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Dining table {} not found", thing)))
    }

    /// Hard delete a dining table
    pub async fn delete(&self, thing: &RecordId) -> RepoResult<()> {
        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing.clone()))
            .await?
            .check()?;
        Ok(())
    }
}
