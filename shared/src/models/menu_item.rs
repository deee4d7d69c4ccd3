//! Menu Item enums and payloads

use super::string_enum;
use serde::{Deserialize, Serialize};

/// 菜单分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuCategory {
    Appetizers,
    Main,
    Sides,
    Desserts,
    Drinks,
}

string_enum!(MenuCategory, "menu category", {
    Appetizers => "appetizers",
    Main => "main",
    Sides => "sides",
    Desserts => "desserts",
    Drinks => "drinks",
});

pub const DEFAULT_MENU_IMAGE: &str = "/img/default-dish.jpg";
pub const DEFAULT_PREPARATION_TIME: i64 = 15;

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub category: MenuCategory,
    pub is_available: Option<bool>,
    pub preparation_time: Option<i64>,
    pub image: Option<String>,
}

/// Update menu item payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<MenuCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preparation_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// `PATCH /api/menu/{id}/availability` body
///
/// Raw JSON value so that non-boolean input is reported as a validation
/// error rather than a rejected body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityUpdate {
    #[serde(default)]
    pub is_available: serde_json::Value,
}

impl AvailabilityUpdate {
    pub fn value(&self) -> Option<bool> {
        self.is_available.as_bool()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serde() {
        let c: MenuCategory = serde_json::from_str("\"desserts\"").unwrap();
        assert_eq!(c, MenuCategory::Desserts);
        assert_eq!(serde_json::to_string(&MenuCategory::Main).unwrap(), "\"main\"");
        assert_eq!(MenuCategory::ALL.len(), 5);
    }

    #[test]
    fn test_availability_requires_boolean() {
        let body: AvailabilityUpdate =
            serde_json::from_str(r#"{"is_available": false}"#).unwrap();
        assert_eq!(body.value(), Some(false));

        let body: AvailabilityUpdate =
            serde_json::from_str(r#"{"is_available": "false"}"#).unwrap();
        assert_eq!(body.value(), None);

        let body: AvailabilityUpdate = serde_json::from_str("{}").unwrap();
        assert_eq!(body.value(), None);
    }
}
