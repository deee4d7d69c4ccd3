//! Menu Item Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use shared::models::{DEFAULT_MENU_IMAGE, DEFAULT_PREPARATION_TIME, MenuCategory};
use surrealdb::RecordId;

/// Menu item entity (菜品)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub category: MenuCategory,
    #[serde(
        default = "default_true",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub is_available: bool,
    #[serde(default = "default_preparation_time")]
    pub preparation_time: i64,
    #[serde(default = "default_image")]
    pub image: String,
    #[serde(default)]
    pub created_at: i64,
}

fn default_true() -> bool {
    true
}

fn default_preparation_time() -> i64 {
    DEFAULT_PREPARATION_TIME
}

fn default_image() -> String {
    DEFAULT_MENU_IMAGE.to_string()
}
