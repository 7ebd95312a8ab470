use serde::{Deserialize, Serialize};

/// Account roles as the API names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "Super-admin")]
    SuperAdmin,
    #[serde(rename = "Inventory-Admin")]
    InventoryAdmin,
    #[serde(rename = "Inventory-Staff")]
    InventoryStaff,
    #[serde(rename = "Fulfillment-Admin")]
    FulfillmentAdmin,
    #[serde(rename = "Fulfillment-Staff")]
    FulfillmentStaff,
    #[serde(rename = "Dealer")]
    Dealer,
    #[serde(rename = "User")]
    User,
}

impl Role {
    pub fn code(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "Super-admin",
            Role::InventoryAdmin => "Inventory-Admin",
            Role::InventoryStaff => "Inventory-Staff",
            Role::FulfillmentAdmin => "Fulfillment-Admin",
            Role::FulfillmentStaff => "Fulfillment-Staff",
            Role::Dealer => "Dealer",
            Role::User => "User",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "Super Admin",
            Role::InventoryAdmin => "Inventory Admin",
            Role::InventoryStaff => "Inventory Staff",
            Role::FulfillmentAdmin => "Fulfillment Admin",
            Role::FulfillmentStaff => "Fulfillment Staff",
            Role::Dealer => "Dealer",
            Role::User => "User",
        }
    }

    pub fn all() -> Vec<Role> {
        vec![
            Role::SuperAdmin,
            Role::InventoryAdmin,
            Role::InventoryStaff,
            Role::FulfillmentAdmin,
            Role::FulfillmentStaff,
            Role::Dealer,
            Role::User,
        ]
    }

    /// Roles an administrator may assign to a new employee.
    pub fn employee_roles() -> Vec<Role> {
        Self::all()
            .into_iter()
            .filter(|r| !matches!(r, Role::Dealer | Role::User))
            .collect()
    }

    /// Case-insensitive; the API is not consistent about `Super-admin` vs `Super-Admin`.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::all()
            .into_iter()
            .find(|r| r.code().eq_ignore_ascii_case(code))
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for role in Role::all() {
            assert_eq!(Role::from_code(role.code()), Some(role));
        }
        assert_eq!(Role::from_code("super-ADMIN"), Some(Role::SuperAdmin));
        assert_eq!(Role::from_code("Janitor"), None);
        assert_eq!(Role::employee_roles().len(), 5);
    }

    #[test]
    fn test_serde_names() {
        let role: Role = serde_json::from_str("\"Fulfillment-Staff\"").unwrap();
        assert_eq!(role, Role::FulfillmentStaff);
        assert_eq!(serde_json::to_string(&Role::SuperAdmin).unwrap(), "\"Super-admin\"");
    }
}
