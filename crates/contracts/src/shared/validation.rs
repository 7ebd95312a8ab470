//! Field-level validation for the add/edit forms.
//!
//! Errors are collected per field and rendered inline next to the input;
//! they never reach a global handler.

use serde::Serialize;
use std::fmt;

/// Ordered field → message pairs. The first message recorded for a field wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    fields: Vec<(String, String)>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = field.into();
        if self.get(&field).is_none() {
            self.fields.push((field, message.into()));
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(f, _)| f == field)
            .map(|(_, m)| m.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(f, m)| (f.as_str(), m.as_str()))
    }

    /// Prefixes every field with `prefix.` (used for nested rows such as
    /// `dealerAssignments.0.quantity`).
    pub fn merge_nested(&mut self, prefix: &str, nested: ValidationErrors) {
        for (field, message) in nested.fields {
            self.add(format!("{prefix}.{field}"), message);
        }
    }

    pub fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }

    /// Records `message` for `field` when `value` is blank.
    pub fn required(&mut self, field: &str, value: &str, message: &str) {
        if value.trim().is_empty() {
            self.add(field, message);
        }
    }

    /// Records `message` for `field` when `ok` is false.
    pub fn check(&mut self, field: &str, ok: bool, message: &str) {
        if !ok {
            self.add(field, message);
        }
    }

    /// Parses `value` as a number no smaller than `min`.
    pub fn min_number(&mut self, field: &str, value: &str, min: f64, message: &str) -> Option<f64> {
        match parse_number(value) {
            Some(n) if n >= min => Some(n),
            _ => {
                self.add(field, message);
                None
            }
        }
    }

    /// Parses `value` as a whole number no smaller than `min`.
    pub fn integer(&mut self, field: &str, value: &str, min: i64, message: &str) -> Option<i64> {
        match parse_integer(value) {
            Some(n) if n >= min => Some(n),
            _ => {
                self.add(field, message);
                None
            }
        }
    }

    pub fn email(&mut self, field: &str, value: &str, message: &str) {
        self.check(field, is_valid_email(value), message);
    }

    pub fn phone(&mut self, field: &str, value: &str, message: &str) {
        self.check(field, is_valid_phone(value), message);
    }

    pub fn gstin(&mut self, field: &str, value: &str, message: &str) {
        self.check(field, is_valid_gstin(value), message);
    }

    pub fn pan(&mut self, field: &str, value: &str, message: &str) {
        self.check(field, is_valid_pan(value), message);
    }

    pub fn pincode(&mut self, field: &str, value: &str, message: &str) {
        self.check(field, is_valid_pincode(value), message);
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.fields.iter().map(|(name, _)| name.as_str()).collect();
        write!(f, "invalid fields: {}", names.join(", "))
    }
}

pub fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

pub fn parse_integer(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok()
}

pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Ten-digit mobile number, optionally prefixed with `+91`; spaces and dashes are ignored.
pub fn is_valid_phone(value: &str) -> bool {
    let compact: String = value
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    let digits = compact.strip_prefix("+91").unwrap_or(&compact);
    digits.len() == 10 && digits.chars().all(|c| c.is_ascii_digit())
}

pub fn is_valid_pincode(value: &str) -> bool {
    let value = value.trim();
    value.len() == 6 && value.chars().all(|c| c.is_ascii_digit())
}

/// Indian PAN: five letters, four digits, one letter.
pub fn is_valid_pan(value: &str) -> bool {
    let value = value.trim();
    let chars: Vec<char> = value.chars().collect();
    chars.len() == 10
        && chars[..5].iter().all(|c| c.is_ascii_uppercase())
        && chars[5..9].iter().all(|c| c.is_ascii_digit())
        && chars[9].is_ascii_uppercase()
}

/// GSTIN: 15 uppercase alphanumerics starting with a two-digit state code.
pub fn is_valid_gstin(value: &str) -> bool {
    let value = value.trim();
    value.len() == 15
        && value.chars().take(2).all(|c| c.is_ascii_digit())
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_message_per_field_wins() {
        let mut errors = ValidationErrors::new();
        errors.required("email", "", "Email is required");
        errors.check("email", false, "Invalid email");
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_nested_merge_and_result() {
        let mut row = ValidationErrors::new();
        row.add("quantity", "Quantity must be at least 1");
        let mut errors = ValidationErrors::new();
        errors.merge_nested("dealerAssignments.0", row);
        assert_eq!(
            errors.get("dealerAssignments.0.quantity"),
            Some("Quantity must be at least 1")
        );
        assert!(errors.clone().into_result(()).is_err());
        assert_eq!(ValidationErrors::new().into_result(5), Ok(5));
    }

    #[test]
    fn test_field_formats() {
        assert!(is_valid_email("ops@parts.example"));
        assert!(!is_valid_email("ops@parts"));
        assert!(!is_valid_email("ops parts@example.com"));
        assert!(is_valid_phone("98765 43210"));
        assert!(is_valid_phone("+91-9876543210"));
        assert!(!is_valid_phone("12345"));
        assert!(is_valid_pincode("560001"));
        assert!(!is_valid_pincode("56001"));
        assert!(is_valid_pan("ABCDE1234F"));
        assert!(!is_valid_pan("ABCD11234F"));
        assert!(is_valid_gstin("29ABCDE1234F1Z5"));
        assert!(!is_valid_gstin("29abcde1234f1z5"));
    }

    #[test]
    fn test_number_parsing() {
        assert_eq!(parse_number(" 12.5 "), Some(12.5));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_integer("7"), Some(7));
        assert_eq!(parse_integer("7.5"), None);
    }

    #[test]
    fn test_numeric_rules() {
        let mut errors = ValidationErrors::new();
        assert_eq!(errors.min_number("mrp", "499", 1.0, "MRP must be at least 1"), Some(499.0));
        assert_eq!(errors.min_number("gst", "0", 1.0, "GST must be at least 1"), None);
        assert_eq!(errors.integer("stock", "-1", 0, "Stock must be 0 or more"), None);
        assert_eq!(errors.integer("qty", "3", 1, "Quantity must be at least 1"), Some(3));
        assert_eq!(errors.get("gst"), Some("GST must be at least 1"));
        assert_eq!(errors.get("stock"), Some("Stock must be 0 or more"));
        assert_eq!(errors.len(), 2);
    }
}
