use super::aggregate::{Address, ContactPerson};
use crate::shared::validation::ValidationErrors;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MARGIN: &str = "15";
pub const SLA_TYPES: [&str; 3] = ["Standard", "Priority", "Express"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealerForm {
    pub email: String,
    pub password: String,
    pub phone_number: String,
    pub legal_name: String,
    pub trade_name: String,
    pub gstin: String,
    pub pan: String,
    pub address: Address,
    pub contact_person: ContactPerson,
    pub categories_allowed: Vec<String>,
    pub upload_access_enabled: bool,
    pub default_margin: String,
    pub assigned_employees: Vec<String>,
    pub sla_type: String,
    pub remarks: String,
}

impl Default for DealerForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            phone_number: String::new(),
            legal_name: String::new(),
            trade_name: String::new(),
            gstin: String::new(),
            pan: String::new(),
            address: Address::default(),
            contact_person: ContactPerson::default(),
            categories_allowed: Vec::new(),
            upload_access_enabled: true,
            default_margin: DEFAULT_MARGIN.to_string(),
            assigned_employees: Vec::new(),
            sla_type: SLA_TYPES[0].to_string(),
            remarks: String::new(),
        }
    }
}

/// Body of `POST /users/api/users/dealer`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealerPayload {
    pub email: String,
    pub password: String,
    #[serde(rename = "phone_Number")]
    pub phone_number: String,
    pub legal_name: String,
    pub trade_name: String,
    #[serde(rename = "GSTIN")]
    pub gstin: String,
    #[serde(rename = "Pan")]
    pub pan: String,
    #[serde(rename = "Address")]
    pub address: Address,
    pub contact_person: ContactPerson,
    pub categories_allowed: Vec<String>,
    pub upload_access_enabled: bool,
    pub default_margin: f64,
    #[serde(rename = "assigned_Toprise_employee")]
    pub assigned_employees: Vec<String>,
    #[serde(rename = "SLA_type")]
    pub sla_type: String,
    pub onboarding_date: NaiveDate,
    pub remarks: String,
}

impl DealerForm {
    pub fn toggle_category(&mut self, id: &str) {
        toggle(&mut self.categories_allowed, id);
    }

    pub fn toggle_employee(&mut self, id: &str) {
        toggle(&mut self.assigned_employees, id);
    }

    pub fn validate(&self, today: NaiveDate) -> Result<DealerPayload, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        errors.email("email", &self.email, "Please enter a valid email address");
        errors.phone("phone_Number", &self.phone_number, "Phone number must be 10 digits");
        errors.required("legal_name", &self.legal_name, "Legal name is required");
        errors.required("trade_name", &self.trade_name, "Trade name is required");
        errors.gstin("GSTIN", &self.gstin.to_uppercase(), "GSTIN must be 15 characters");
        errors.pan("Pan", &self.pan.to_uppercase(), "PAN must be 10 characters");
        errors.required("Address.street", &self.address.street, "Street is required");
        errors.required("Address.city", &self.address.city, "City is required");
        errors.required("Address.state", &self.address.state, "State is required");
        errors.pincode("Address.pincode", &self.address.pincode, "Pincode must be 6 digits");
        errors.required("contact_person.name", &self.contact_person.name, "Contact person is required");
        if !self.contact_person.email.trim().is_empty() {
            errors.email("contact_person.email", &self.contact_person.email, "Please enter a valid email address");
        }
        if !self.contact_person.phone_number.trim().is_empty() {
            errors.phone("contact_person.phone_number", &self.contact_person.phone_number, "Phone number must be 10 digits");
        }
        let margin = errors.min_number("default_margin", &self.default_margin, 0.0, "Margin must be between 0 and 100");
        if margin.is_some_and(|m| m > 100.0) {
            errors.add("default_margin", "Margin must be between 0 and 100");
        }
        errors.check(
            "categories_allowed",
            !self.categories_allowed.is_empty(),
            "Select at least one category",
        );

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(DealerPayload {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            phone_number: self.phone_number.trim().to_string(),
            legal_name: self.legal_name.trim().to_string(),
            trade_name: self.trade_name.trim().to_string(),
            gstin: self.gstin.trim().to_uppercase(),
            pan: self.pan.trim().to_uppercase(),
            address: self.address.clone(),
            contact_person: self.contact_person.clone(),
            categories_allowed: self.categories_allowed.clone(),
            upload_access_enabled: self.upload_access_enabled,
            default_margin: margin.unwrap_or_default(),
            assigned_employees: self.assigned_employees.clone(),
            sla_type: self.sla_type.clone(),
            onboarding_date: today,
            remarks: self.remarks.clone(),
        })
    }
}

fn toggle(list: &mut Vec<String>, id: &str) {
    if let Some(pos) = list.iter().position(|x| x == id) {
        list.remove(pos);
    } else {
        list.push(id.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 18).unwrap()
    }

    fn filled() -> DealerForm {
        let mut form = DealerForm {
            email: "sales@beta.example".into(),
            phone_number: "9876543210".into(),
            legal_name: "Beta Parts Pvt Ltd".into(),
            trade_name: "Beta Parts".into(),
            gstin: "29abcde1234f1z5".into(),
            pan: "abcde1234f".into(),
            address: Address {
                street: "12 MG Road".into(),
                city: "Bengaluru".into(),
                pincode: "560001".into(),
                state: "Karnataka".into(),
            },
            contact_person: ContactPerson {
                name: "Ravi".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        form.toggle_category("c1");
        form
    }

    #[test]
    fn test_defaults() {
        let form = DealerForm::default();
        assert_eq!(form.default_margin, "15");
        assert_eq!(form.sla_type, "Standard");
        assert!(form.upload_access_enabled);
    }

    #[test]
    fn test_valid_payload() {
        let payload = filled().validate(today()).unwrap();
        assert_eq!(payload.gstin, "29ABCDE1234F1Z5");
        assert_eq!(payload.pan, "ABCDE1234F");
        assert_eq!(payload.default_margin, 15.0);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["Address"]["pincode"], "560001");
        assert_eq!(json["SLA_type"], "Standard");
        assert_eq!(json["onboarding_date"], "2025-03-18");
    }

    #[test]
    fn test_invalid_fields() {
        let mut form = filled();
        form.toggle_category("c1");
        form.address.pincode = "5600".into();
        form.default_margin = "120".into();
        form.gstin = "29ABC".into();
        let errors = form.validate(today()).unwrap_err();
        assert_eq!(errors.get("categories_allowed"), Some("Select at least one category"));
        assert_eq!(errors.get("Address.pincode"), Some("Pincode must be 6 digits"));
        assert_eq!(errors.get("default_margin"), Some("Margin must be between 0 and 100"));
        assert_eq!(errors.get("GSTIN"), Some("GSTIN must be 15 characters"));
        assert_eq!(errors.get("Pan"), None);
    }
}
