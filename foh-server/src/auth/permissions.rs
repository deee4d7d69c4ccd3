//! Permission Definitions
//!
//! 角色在登录时展开为权限列表并写入会话令牌。
//!
//! | 角色 | 权限 |
//! |------|------|
//! | admin | `all` |
//! | chef | `menu:availability`, `kitchen:view` |
//! | waiter | 无 (登录即可使用基础接口) |

use shared::models::UserRole;

/// 超级权限
pub const ALL: &str = "all";

pub const MENU_MANAGE: &str = "menu:manage";
pub const MENU_AVAILABILITY: &str = "menu:availability";
pub const TABLES_MANAGE: &str = "tables:manage";
pub const USERS_MANAGE: &str = "users:manage";
pub const KITCHEN_VIEW: &str = "kitchen:view";
pub const REPORTS_VIEW: &str = "reports:view";

pub const DEFAULT_ADMIN_PERMISSIONS: &[&str] = &[ALL];

pub const DEFAULT_CHEF_PERMISSIONS: &[&str] = &[MENU_AVAILABILITY, KITCHEN_VIEW];

pub const DEFAULT_WAITER_PERMISSIONS: &[&str] = &[];

/// Get permissions for a role
pub fn role_permissions(role: UserRole) -> Vec<String> {
    let perms = match role {
        UserRole::Admin => DEFAULT_ADMIN_PERMISSIONS,
        UserRole::Chef => DEFAULT_CHEF_PERMISSIONS,
        UserRole::Waiter => DEFAULT_WAITER_PERMISSIONS,
    };
    perms.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_permissions() {
        assert_eq!(role_permissions(UserRole::Admin), vec!["all"]);
        assert_eq!(
            role_permissions(UserRole::Chef),
            vec!["menu:availability", "kitchen:view"]
        );
        assert!(role_permissions(UserRole::Waiter).is_empty());
    }
}
