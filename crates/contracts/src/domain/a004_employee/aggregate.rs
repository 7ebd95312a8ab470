use crate::shared::list_processor::{Searchable, Sortable};
use crate::shared::lookup::LookupTables;
use crate::shared::select_option::SelectOption;
use crate::system::users::{DirectoryEntry, UserKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub employee_id: Option<String>,
    #[serde(rename = "First_name", alias = "first_name", default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub mobile_number: Option<String>,
    #[serde(rename = "phone_Number", default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(rename = "employeeRole", default)]
    pub employee_role: Option<String>,
    #[serde(default)]
    pub assigned_regions: Vec<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Employee {
    pub fn phone(&self) -> Option<&str> {
        self.mobile_number.as_deref().or(self.phone_number.as_deref())
    }

    /// `employeeRole` wins over the account role when both are present.
    pub fn role_name(&self) -> Option<&str> {
        self.employee_role
            .as_deref()
            .filter(|r| !r.is_empty())
            .or(self.role.as_deref())
    }

    /// "Active" unless the API says otherwise.
    pub fn status_label(&self) -> &str {
        self.status.as_deref().filter(|s| !s.is_empty()).unwrap_or("Active")
    }
}

impl Searchable for Employee {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            self.full_name.as_deref(),
            self.employee_id.as_deref(),
            self.email.as_deref(),
            self.phone(),
            self.role_name(),
        ]
    }
}

impl Sortable for Employee {
    fn sort_key(&self, field: &str, _lookups: &LookupTables) -> Option<String> {
        match field {
            "name" => Some(self.full_name.clone().unwrap_or_default()),
            "employeeId" => Some(self.employee_id.clone().unwrap_or_default()),
            "email" => Some(self.email.clone().unwrap_or_default()),
            "role" => Some(self.role_name().unwrap_or_default().to_string()),
            "status" => Some(self.status_label().to_string()),
            _ => None,
        }
    }
}

impl DirectoryEntry for Employee {
    const KIND: UserKind = UserKind::Employee;

    fn role(&self) -> Option<&str> {
        self.role_name()
    }

    fn status(&self) -> &str {
        self.status_label()
    }

    fn regions(&self) -> &[String] {
        &self.assigned_regions
    }
}

/// Label is "Full Name (EMP-ID)" when both are known.
impl From<Employee> for SelectOption {
    fn from(e: Employee) -> Self {
        let name = e.full_name.clone().filter(|n| !n.is_empty());
        let label = match (name, e.employee_id.as_deref().filter(|i| !i.is_empty())) {
            (Some(name), Some(code)) => format!("{name} ({code})"),
            (Some(name), None) => name,
            (None, Some(code)) => code.to_string(),
            (None, None) => e.email.clone().unwrap_or_else(|| e.id.clone()),
        };
        SelectOption::new(e.id, label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_employee_from_api_and_option_label() {
        let employee: Employee = serde_json::from_value(json!({
            "_id": "e1",
            "employee_id": "EMP-7",
            "First_name": "Asha Rao",
            "email": "asha@parts.example",
            "phone_Number": "9876543210",
            "employeeRole": "Fulfillment-Staff",
            "assigned_regions": ["South"]
        }))
        .unwrap();
        assert_eq!(employee.role_name(), Some("Fulfillment-Staff"));
        assert_eq!(employee.status_label(), "Active");

        let option = SelectOption::from(employee);
        assert_eq!(option.id, "e1");
        assert_eq!(option.label, "Asha Rao (EMP-7)");
    }
}
