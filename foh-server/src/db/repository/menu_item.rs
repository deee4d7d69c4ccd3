//! Menu Item Repository

use super::{BaseRepository, RepoError, RepoResult, parse_record_id};
use crate::db::models::MenuItem;
use shared::models::{
    DEFAULT_MENU_IMAGE, DEFAULT_PREPARATION_TIME, MenuCategory, MenuItemCreate, MenuItemUpdate,
};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

pub const TABLE: &str = "menu_item";

#[derive(Clone)]
pub struct MenuItemRepository {
    base: BaseRepository,
}

impl MenuItemRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all menu items, grouped by category then name
    pub async fn find_all(&self) -> RepoResult<Vec<MenuItem>> {
        let items: Vec<MenuItem> = self
            .base
            .db()
            .query("SELECT * FROM menu_item ORDER BY category, name")
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Find menu items in one category
    pub async fn find_by_category(&self, category: MenuCategory) -> RepoResult<Vec<MenuItem>> {
        let items: Vec<MenuItem> = self
            .base
            .db()
            .query("SELECT * FROM menu_item WHERE category = $category ORDER BY name")
            .bind(("category", category))
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Find menu item by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<MenuItem>> {
        let thing = parse_record_id(TABLE, id)?;
        self.find_by_record_id(thing).await
    }

    pub async fn find_by_record_id(&self, thing: RecordId) -> RepoResult<Option<MenuItem>> {
        let item: Option<MenuItem> = self.base.db().select(thing).await?;
        Ok(item)
    }

    /// Create a new menu item
    pub async fn create(&self, data: MenuItemCreate, now: i64) -> RepoResult<MenuItem> {
        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE menu_item SET
                    name = $name,
                    description = $description,
                    price = $price,
                    category = $category,
                    is_available = $is_available,
                    preparation_time = $preparation_time,
                    image = $image,
                    created_at = $now
                RETURN AFTER"#,
            )
            .bind(("name", data.name))
            .bind(("description", data.description))
            .bind(("price", data.price))
            .bind(("category", data.category))
            .bind(("is_available", data.is_available.unwrap_or(true)))
            .bind((
                "preparation_time",
                data.preparation_time.unwrap_or(DEFAULT_PREPARATION_TIME),
            ))
            .bind((
                "image",
                data.image.unwrap_or_else(|| DEFAULT_MENU_IMAGE.to_string()),
            ))
            .bind(("now", now))
            .await?;

        let created: Option<MenuItem> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create menu item".to_string()))
    }

    /// Update a menu item; absent fields keep their stored value
    pub async fn update(&self, id: &str, data: MenuItemUpdate) -> RepoResult<MenuItem> {
        let thing = parse_record_id(TABLE, id)?;
        let existing = self
            .find_by_record_id(thing.clone())
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Menu item {} not found", id)))?;

        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $thing SET
                    name = $name,
                    description = $description,
                    price = $price,
                    category = $category,
                    is_available = $is_available,
                    preparation_time = $preparation_time,
                    image = $image
                RETURN AFTER"#,
            )
            .bind(("thing", thing))
            .bind(("name", data.name.unwrap_or(existing.name)))
            .bind(("description", data.description.unwrap_or(existing.description)))
            .bind(("price", data.price.unwrap_or(existing.price)))
            .bind(("category", data.category.unwrap_or(existing.category)))
            .bind(("is_available", data.is_available.unwrap_or(existing.is_available)))
            .bind((
                "preparation_time",
                data.preparation_time.unwrap_or(existing.preparation_time),
            ))
            .bind(("image", data.image.unwrap_or(existing.image)))
            .await?;

        result
            .take::<Option<MenuItem>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Menu item {} not found", id)))
    }

    /// Set availability only
    pub async fn set_availability(&self, id: &str, is_available: bool) -> RepoResult<MenuItem> {
        let thing = parse_record_id(TABLE, id)?;
        if self.find_by_record_id(thing.clone()).await?.is_none() {
            return Err(RepoError::NotFound(format!("Menu item {} not found", id)));
        }

        let mut result = self
            .base
            .db()
            .query("UPDATE $thing SET is_available = $is_available RETURN AFTER")
            .bind(("thing", thing))
            .bind(("is_available", is_available))
            .await?;

        result
            .take::<Option<MenuItem>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Menu item {} not found", id)))
    }

    /// Hard delete a menu item
    ///
    /// Existing orders keep their name/price snapshots.
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = parse_record_id(TABLE, id)?;
        if self.find_by_record_id(thing.clone()).await?.is_none() {
            return Ok(false);
        }
        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?
            .check()?;
        Ok(true)
    }
}
