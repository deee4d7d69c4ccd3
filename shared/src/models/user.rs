//! User enums and payloads

use super::string_enum;
use serde::{Deserialize, Serialize};

/// 员工角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    Waiter,
    Chef,
}

string_enum!(UserRole, "role", {
    Admin => "admin",
    Waiter => "waiter",
    Chef => "chef",
});

/// Create user payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub username: String,
    pub password: String,
    pub name: String,
    pub role: Option<UserRole>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_defaults_to_waiter() {
        assert_eq!(UserRole::default(), UserRole::Waiter);
        let body: UserCreate =
            serde_json::from_str(r#"{"username":"ana","password":"pw12","name":"Ana"}"#).unwrap();
        assert_eq!(body.role.unwrap_or_default(), UserRole::Waiter);
    }

    #[test]
    fn test_unknown_role_rejected() {
        assert!(serde_json::from_str::<UserRole>("\"manager\"").is_err());
    }
}
