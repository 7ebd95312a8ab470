//! End-user accounts and the shared filter panel of the user-management
//! tabs (employees, dealers, app users).

use crate::shared::collation::locale_compare;
use crate::shared::list_processor::{Searchable, Sortable};
use crate::shared::lookup::LookupTables;
use serde::{Deserialize, Serialize};

/// Sentinel for "no filter" in the role/status/region dropdowns.
pub const ALL: &str = "all";

pub const DEFAULT_REGIONS: [&str; 9] = [
    "North", "South", "East", "West", "Central", "Northeast", "Northwest", "Southeast", "Southwest",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserKind {
    Employee,
    Dealer,
    Users,
}

impl UserKind {
    pub fn code(&self) -> &'static str {
        match self {
            UserKind::Employee => "employee",
            UserKind::Dealer => "dealer",
            UserKind::Users => "users",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UserKind::Employee => "Employees",
            UserKind::Dealer => "Dealers",
            UserKind::Users => "Users",
        }
    }

    pub fn all() -> Vec<UserKind> {
        vec![UserKind::Employee, UserKind::Dealer, UserKind::Users]
    }

    pub fn statuses(&self) -> &'static [&'static str] {
        match self {
            UserKind::Employee => &["Active", "Inactive"],
            UserKind::Dealer => &["active", "inactive"],
            UserKind::Users => &["Active", "Inactive (Deleted)"],
        }
    }

    /// Dealers have a fixed role list; other tabs derive roles from the data.
    pub fn fixed_roles(&self) -> Option<&'static [&'static str]> {
        match self {
            UserKind::Dealer => Some(&["admin", "user", "dealer"]),
            _ => None,
        }
    }
}

/// A row of one of the user-management tabs.
pub trait DirectoryEntry {
    const KIND: UserKind;

    fn role(&self) -> Option<&str>;
    fn status(&self) -> &str;
    fn regions(&self) -> &[String];
}

// ============================================================================
// App users
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppUser {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "phone_Number", default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(rename = "isDeleted", alias = "is_deleted", default)]
    pub is_deleted: bool,
}

impl AppUser {
    pub fn status_label(&self) -> &'static str {
        if self.is_deleted {
            "Inactive (Deleted)"
        } else {
            "Active"
        }
    }
}

impl Searchable for AppUser {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            self.username.as_deref(),
            self.email.as_deref(),
            self.phone_number.as_deref(),
        ]
    }
}

impl Sortable for AppUser {
    fn sort_key(&self, field: &str, _lookups: &LookupTables) -> Option<String> {
        match field {
            "username" => Some(self.username.clone().unwrap_or_default()),
            "email" => Some(self.email.clone().unwrap_or_default()),
            "status" => Some(self.status_label().to_string()),
            _ => None,
        }
    }
}

impl DirectoryEntry for AppUser {
    const KIND: UserKind = UserKind::Users;

    fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    fn status(&self) -> &str {
        self.status_label()
    }

    fn regions(&self) -> &[String] {
        &[]
    }
}

// ============================================================================
// Filters
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFilters {
    pub kind: UserKind,
    pub search: String,
    pub role: String,
    pub status: String,
    pub region: String,
}

impl UserFilters {
    pub fn new(kind: UserKind) -> Self {
        Self {
            kind,
            search: String::new(),
            role: ALL.to_string(),
            status: ALL.to_string(),
            region: ALL.to_string(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.kind);
    }

    /// Badge count on the Filters button. The role filter is hidden for app users.
    pub fn applied_count(&self) -> usize {
        [
            !self.search.is_empty(),
            self.kind != UserKind::Users && self.role != ALL,
            self.status != ALL,
            self.region != ALL,
        ]
        .into_iter()
        .filter(|applied| *applied)
        .count()
    }

    pub fn matches<T: DirectoryEntry>(&self, row: &T) -> bool {
        let role_ok = self.kind == UserKind::Users
            || self.role == ALL
            || row.role().is_some_and(|r| r.eq_ignore_ascii_case(&self.role));
        let status_ok = self.status == ALL || row.status().eq_ignore_ascii_case(&self.status);
        let region_ok = self.region == ALL || row.regions().iter().any(|r| r == &self.region);
        role_ok && status_ok && region_ok
    }

    pub fn apply<T: DirectoryEntry + Clone>(&self, rows: &[T]) -> Vec<T> {
        rows.iter().filter(|r| self.matches(*r)).cloned().collect()
    }
}

/// Distinct roles present in `rows`, or the fixed list for dealers.
pub fn available_roles<T: DirectoryEntry>(rows: &[T]) -> Vec<String> {
    if let Some(fixed) = T::KIND.fixed_roles() {
        return fixed.iter().map(|r| r.to_string()).collect();
    }
    let mut roles: Vec<String> = Vec::new();
    for role in rows.iter().filter_map(DirectoryEntry::role) {
        if !role.is_empty() && !roles.iter().any(|r| r == role) {
            roles.push(role.to_string());
        }
    }
    roles.sort_by(|a, b| locale_compare(a, b));
    roles
}

/// Regions present in `rows`, falling back to the predefined list.
pub fn available_regions<T: DirectoryEntry>(rows: &[T]) -> Vec<String> {
    let mut regions: Vec<String> = Vec::new();
    for region in rows.iter().flat_map(|r| r.regions()) {
        if !regions.contains(region) {
            regions.push(region.clone());
        }
    }
    if regions.is_empty() {
        return DEFAULT_REGIONS.iter().map(|r| r.to_string()).collect();
    }
    regions.sort_by(|a, b| locale_compare(a, b));
    regions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_employee::Employee;
    use crate::shared::normalize::normalize_collection;
    use serde_json::json;

    fn employees() -> Vec<Employee> {
        let body = json!({ "data": [
            { "_id": "e1", "First_name": "Asha", "role": "Inventory-Staff", "assigned_regions": ["South"] },
            { "_id": "e2", "First_name": "Ravi", "employeeRole": "Fulfillment-Admin", "status": "Inactive", "assigned_regions": ["North", "South"] },
            { "_id": "e3", "First_name": "Meera", "role": "inventory-staff" }
        ]});
        normalize_collection("employees", body).unwrap()
    }

    fn ids(rows: &[Employee]) -> Vec<&str> {
        rows.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_applied_count_and_reset() {
        let mut filters = UserFilters::new(UserKind::Employee);
        assert_eq!(filters.applied_count(), 0);
        filters.search = "asha".into();
        filters.role = "Inventory-Staff".into();
        filters.region = "South".into();
        assert_eq!(filters.applied_count(), 3);

        let mut users = UserFilters::new(UserKind::Users);
        users.role = "User".into();
        users.status = "Active".into();
        assert_eq!(users.applied_count(), 1);

        filters.reset();
        assert_eq!(filters, UserFilters::new(UserKind::Employee));
    }

    #[test]
    fn test_role_status_region_filtering() {
        let rows = employees();
        let mut filters = UserFilters::new(UserKind::Employee);
        filters.role = "Inventory-Staff".into();
        assert_eq!(ids(&filters.apply(&rows)), ["e1", "e3"]);

        filters.role = ALL.into();
        filters.status = "Active".into();
        assert_eq!(ids(&filters.apply(&rows)), ["e1", "e3"]);

        filters.status = ALL.into();
        filters.region = "South".into();
        assert_eq!(ids(&filters.apply(&rows)), ["e1", "e2"]);
    }

    #[test]
    fn test_available_lists() {
        let rows = employees();
        assert_eq!(
            available_roles(&rows),
            ["Fulfillment-Admin", "inventory-staff", "Inventory-Staff"]
        );
        assert_eq!(available_regions(&rows), ["North", "South"]);
        assert_eq!(available_regions::<AppUser>(&[]).len(), 9);
        assert_eq!(available_roles::<crate::domain::a005_dealer::Dealer>(&[]), ["admin", "user", "dealer"]);
    }

    #[test]
    fn test_app_user_status() {
        let user: AppUser = serde_json::from_value(json!({ "_id": "u1", "isDeleted": true })).unwrap();
        assert_eq!(user.status_label(), "Inactive (Deleted)");
        let filters = UserFilters {
            status: "inactive (deleted)".into(),
            ..UserFilters::new(UserKind::Users)
        };
        assert!(filters.matches(&user));
    }
}
