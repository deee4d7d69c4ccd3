//! Dining Table Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use shared::models::{TableLocation, TableStatus};
use surrealdb::RecordId;

/// Dining table entity (桌台)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTable {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub number: i64,
    pub seats: i64,
    #[serde(default)]
    pub status: TableStatus,
    #[serde(default)]
    pub location: TableLocation,
    /// Floor-plan coordinates
    #[serde(default)]
    pub position_x: f64,
    #[serde(default)]
    pub position_y: f64,
}
