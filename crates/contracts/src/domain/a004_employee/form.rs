use crate::enums::role::Role;
use crate::shared::validation::ValidationErrors;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeForm {
    pub email: String,
    pub username: String,
    pub password: String,
    pub mobile_number: String,
    pub role: String,
    pub employee_id: String,
    pub full_name: String,
    pub assigned_regions: Vec<String>,
}

/// Body of `create-Employee`, with the field names the API expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeePayload {
    pub email: String,
    pub username: String,
    pub password: String,
    #[serde(rename = "phone_Number")]
    pub phone_number: String,
    pub mobile_number: String,
    pub role: Role,
    #[serde(rename = "employeeRole")]
    pub employee_role: Role,
    pub employee_id: String,
    #[serde(rename = "First_name")]
    pub first_name: String,
    pub assigned_regions: Vec<String>,
}

pub const MIN_PASSWORD_LEN: usize = 8;

impl EmployeeForm {
    pub fn toggle_region(&mut self, region: &str) {
        if let Some(pos) = self.assigned_regions.iter().position(|r| r == region) {
            self.assigned_regions.remove(pos);
        } else {
            self.assigned_regions.push(region.to_string());
        }
    }

    pub fn validate(&self) -> Result<EmployeePayload, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        errors.required("fullName", &self.full_name, "Full name is required");
        errors.required("employeeId", &self.employee_id, "Employee ID is required");
        errors.required("username", &self.username, "Username is required");
        errors.email("email", &self.email, "Please enter a valid email address");
        errors.phone("mobileNumber", &self.mobile_number, "Mobile number must be 10 digits");
        errors.check(
            "password",
            self.password.chars().count() >= MIN_PASSWORD_LEN,
            "Password must be at least 8 characters",
        );

        let role = Role::from_code(&self.role).filter(|r| Role::employee_roles().contains(r));
        errors.check("role", role.is_some(), "Role is required");

        match role {
            Some(role) if errors.is_empty() => Ok(self.to_payload(role)),
            _ => Err(errors),
        }
    }

    pub fn to_payload(&self, role: Role) -> EmployeePayload {
        let mobile = self.mobile_number.trim().to_string();
        EmployeePayload {
            email: self.email.trim().to_string(),
            username: self.username.trim().to_string(),
            password: self.password.clone(),
            phone_number: mobile.clone(),
            mobile_number: mobile,
            role,
            employee_role: role,
            employee_id: self.employee_id.trim().to_string(),
            first_name: self.full_name.trim().to_string(),
            assigned_regions: self.assigned_regions.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> EmployeeForm {
        EmployeeForm {
            email: "asha@parts.example".into(),
            username: "asha".into(),
            password: "s3cretpass".into(),
            mobile_number: "9876543210".into(),
            role: "Inventory-Staff".into(),
            employee_id: "EMP-042".into(),
            full_name: "Asha Rao".into(),
            assigned_regions: vec![],
        }
    }

    #[test]
    fn test_payload_uses_api_field_names() {
        let mut form = filled();
        form.toggle_region("South");
        form.toggle_region("West");
        form.toggle_region("South");
        let payload = form.validate().unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["phone_Number"], "9876543210");
        assert_eq!(json["First_name"], "Asha Rao");
        assert_eq!(json["employeeRole"], "Inventory-Staff");
        assert_eq!(json["employee_id"], "EMP-042");
        assert_eq!(json["assigned_regions"], serde_json::json!(["West"]));
    }

    #[test]
    fn test_rejects_bad_fields() {
        let form = EmployeeForm {
            email: "asha@".into(),
            mobile_number: "98765".into(),
            password: "short".into(),
            role: "Dealer".into(),
            ..filled()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("email"), Some("Please enter a valid email address"));
        assert_eq!(errors.get("mobileNumber"), Some("Mobile number must be 10 digits"));
        assert_eq!(errors.get("password"), Some("Password must be at least 8 characters"));
        assert_eq!(errors.get("role"), Some("Role is required"));
        assert_eq!(errors.get("fullName"), None);
    }
}
