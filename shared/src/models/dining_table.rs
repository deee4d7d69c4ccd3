//! Dining Table enums and payloads

use super::string_enum;
use serde::{Deserialize, Serialize};

/// 桌台状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStatus {
    #[default]
    Available,
    Occupied,
    Reserved,
    Cleaning,
}

string_enum!(TableStatus, "table status", {
    Available => "available",
    Occupied => "occupied",
    Reserved => "reserved",
    Cleaning => "cleaning",
});

/// 桌台区域
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableLocation {
    #[default]
    Inside,
    Outside,
    Bar,
    Private,
}

string_enum!(TableLocation, "table location", {
    Inside => "inside",
    Outside => "outside",
    Bar => "bar",
    Private => "private",
});

/// Create dining table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTableCreate {
    pub number: i64,
    pub seats: i64,
    pub status: Option<TableStatus>,
    pub location: Option<TableLocation>,
    pub position_x: Option<f64>,
    pub position_y: Option<f64>,
}

/// Update dining table payload (only present fields change)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiningTableUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seats: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TableStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<TableLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_y: Option<f64>,
}
