pub use crate::enums::role::Role;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response body; the token may arrive at the root or under `data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub user: Option<UserInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Raw role string; see [`UserInfo::role_kind`].
    #[serde(default)]
    pub role: String,
}

impl UserInfo {
    pub fn role_kind(&self) -> Option<Role> {
        Role::from_code(&self.role)
    }

    pub fn display_name(&self) -> &str {
        self.username
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or(&self.id)
    }
}

/// Role allow-lists checked once when a page mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessPolicy {
    pub allowed: &'static [Role],
}

pub const PERMISSION_DENIED_MESSAGE: &str = "You do not have permission to access this page.";

impl AccessPolicy {
    pub const PRODUCT_EDITORS: AccessPolicy = AccessPolicy {
        allowed: &[Role::SuperAdmin, Role::InventoryAdmin, Role::InventoryStaff],
    };

    pub const USER_ADMINS: AccessPolicy = AccessPolicy {
        allowed: &[Role::SuperAdmin, Role::InventoryAdmin, Role::FulfillmentAdmin],
    };

    pub const TICKET_AGENTS: AccessPolicy = AccessPolicy {
        allowed: &[Role::SuperAdmin, Role::FulfillmentAdmin, Role::FulfillmentStaff],
    };

    /// Any signed-in staff member.
    pub const STAFF: AccessPolicy = AccessPolicy {
        allowed: &[
            Role::SuperAdmin,
            Role::InventoryAdmin,
            Role::InventoryStaff,
            Role::FulfillmentAdmin,
            Role::FulfillmentStaff,
        ],
    };

    pub fn allows_role(&self, role: Role) -> bool {
        self.allowed.contains(&role)
    }

    /// `None` (signed out) and unknown roles are denied.
    pub fn allows(&self, user: Option<&UserInfo>) -> bool {
        user.and_then(UserInfo::role_kind)
            .is_some_and(|role| self.allows_role(role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: &str) -> UserInfo {
        UserInfo {
            id: "u1".into(),
            username: None,
            email: Some("ops@parts.example".into()),
            role: role.into(),
        }
    }

    #[test]
    fn test_policies() {
        assert!(AccessPolicy::PRODUCT_EDITORS.allows(Some(&user("Inventory-Staff"))));
        assert!(!AccessPolicy::PRODUCT_EDITORS.allows(Some(&user("Fulfillment-Admin"))));
        assert!(AccessPolicy::USER_ADMINS.allows(Some(&user("Fulfillment-Admin"))));
        assert!(!AccessPolicy::USER_ADMINS.allows(Some(&user("Inventory-Staff"))));
        assert!(AccessPolicy::TICKET_AGENTS.allows(Some(&user("Fulfillment-Staff"))));
        assert!(!AccessPolicy::STAFF.allows(Some(&user("Dealer"))));
        assert!(!AccessPolicy::STAFF.allows(Some(&user("Mechanic"))));
        assert!(!AccessPolicy::STAFF.allows(None));
    }

    #[test]
    fn test_display_name_fallback() {
        assert_eq!(user("User").display_name(), "ops@parts.example");
    }
}
