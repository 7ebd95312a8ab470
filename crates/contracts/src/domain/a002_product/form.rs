//! Multi-section add-product form.
//!
//! Inputs are kept as the strings the user typed; [`ProductForm::validate`]
//! turns them into the typed [`ProductPayload`] posted to the API or into
//! per-field messages.

use crate::shared::select_option::SelectOption;
use crate::shared::validation::{parse_integer, parse_number, ValidationErrors};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DealerAssignmentForm {
    pub dealer_id: String,
    pub quantity: String,
    pub margin: String,
    pub priority: String,
}

impl DealerAssignmentForm {
    fn validate(&self) -> Result<DealerAssignment, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.required("dealerId", &self.dealer_id, "Dealer is required");
        let quantity = errors.integer("quantity", &self.quantity, 1, "Quantity must be at least 1");
        let margin = optional_number(&mut errors, "margin", &self.margin, "Margin must be a number");
        let priority = if self.priority.trim().is_empty() {
            None
        } else {
            errors.integer("priority", &self.priority, 0, "Priority must be a whole number")
        };
        let assignment = DealerAssignment {
            dealer_id: self.dealer_id.trim().to_string(),
            quantity: quantity.unwrap_or_default(),
            margin,
            priority,
        };
        errors.into_result(assignment)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealerAssignment {
    #[serde(rename = "dealerId")]
    pub dealer_id: String,
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductForm {
    // Core identity
    pub manufacturer_part_name: String,
    pub product_name: String,
    pub hsn_code: String,
    pub category: String,
    pub sub_category: String,
    pub product_type: String,
    pub no_of_stock: String,

    // Vehicle compatibility (cascade values)
    pub vehicle_type: String,
    pub brand: String,
    pub model: String,
    pub variant: String,
    pub year_range: String,
    pub make: String,
    pub fitment_notes: String,
    pub is_universal: bool,
    pub is_consumable: bool,

    // Technical
    pub key_specifications: String,
    pub weight: String,
    pub certifications: String,
    pub warranty: String,

    // Media
    pub video_url: String,

    // Pricing and returns
    pub mrp_with_gst: String,
    pub gst_percentage: String,
    pub selling_price: String,
    pub is_returnable: bool,
    pub return_policy: String,

    // Dealers
    pub dealer_assignments: Vec<DealerAssignmentForm>,
    pub admin_notes: String,

    // SEO
    pub seo_title: String,
    pub search_tags: String,
    pub seo_description: String,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            manufacturer_part_name: String::new(),
            product_name: String::new(),
            hsn_code: String::new(),
            category: String::new(),
            sub_category: String::new(),
            product_type: String::new(),
            no_of_stock: "0".to_string(),
            vehicle_type: String::new(),
            brand: String::new(),
            make: String::new(),
            model: String::new(),
            variant: String::new(),
            year_range: String::new(),
            fitment_notes: String::new(),
            is_universal: false,
            is_consumable: false,
            key_specifications: String::new(),
            weight: String::new(),
            certifications: String::new(),
            warranty: String::new(),
            video_url: String::new(),
            mrp_with_gst: String::new(),
            gst_percentage: String::new(),
            selling_price: String::new(),
            is_returnable: false,
            return_policy: String::new(),
            dealer_assignments: Vec::new(),
            admin_notes: String::new(),
            seo_title: String::new(),
            search_tags: String::new(),
            seo_description: String::new(),
        }
    }
}

/// JSON body of `createProduct`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer_part_name: Option<String>,
    pub product_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hsn_code: Option<i64>,
    pub category: String,
    pub sub_category: String,
    pub product_type: String,
    pub no_of_stock: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    pub make: String,
    pub model: String,
    pub variant: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fitment_notes: Option<String>,
    pub is_universal: bool,
    pub is_consumable: bool,
    #[serde(rename = "keySpecifications", skip_serializing_if = "Option::is_none")]
    pub key_specifications: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certifications: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warranty: Option<i64>,
    #[serde(rename = "videoUrl", skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub mrp_with_gst: f64,
    pub gst_percentage: f64,
    pub selling_price: f64,
    pub is_returnable: bool,
    pub return_policy: String,
    #[serde(rename = "dealerAssignments")]
    pub dealer_assignments: Vec<DealerAssignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo_title: Option<String>,
    pub search_tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo_description: Option<String>,
    pub created_by: String,
}

fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn optional_number(errors: &mut ValidationErrors, field: &str, value: &str, message: &str) -> Option<f64> {
    if value.trim().is_empty() {
        return None;
    }
    let parsed = parse_number(value);
    errors.check(field, parsed.is_some(), message);
    parsed
}

fn optional_integer(errors: &mut ValidationErrors, field: &str, value: &str, message: &str) -> Option<i64> {
    if value.trim().is_empty() {
        return None;
    }
    let parsed = parse_integer(value);
    errors.check(field, parsed.is_some(), message);
    parsed
}

impl ProductForm {
    /// Copies the Vehicle Type → Brand → Model → Variant chain values.
    /// `make` is typed by hand and is left alone.
    pub fn apply_vehicle_chain(&mut self, values: &[Option<String>]) {
        let value = |idx: usize| values.get(idx).cloned().flatten().unwrap_or_default();
        self.vehicle_type = value(0);
        self.brand = value(1);
        self.model = value(2);
        self.variant = value(3);
    }

    /// Copies the Category → Subcategory chain values.
    pub fn apply_category_chain(&mut self, values: &[Option<String>]) {
        self.category = values.first().cloned().flatten().unwrap_or_default();
        self.sub_category = values.get(1).cloned().flatten().unwrap_or_default();
    }

    pub fn add_assignment(&mut self) {
        self.dealer_assignments.push(DealerAssignmentForm {
            quantity: "1".to_string(),
            ..Default::default()
        });
    }

    pub fn remove_assignment(&mut self, idx: usize) {
        if idx < self.dealer_assignments.len() {
            self.dealer_assignments.remove(idx);
        }
    }

    /// Dealers selectable in row `row`: everything not already chosen in another row.
    pub fn available_dealers(&self, row: usize, dealers: &[SelectOption]) -> Vec<SelectOption> {
        dealers
            .iter()
            .filter(|d| {
                !self
                    .dealer_assignments
                    .iter()
                    .enumerate()
                    .any(|(i, a)| i != row && a.dealer_id == d.id)
            })
            .cloned()
            .collect()
    }

    pub fn search_tag_list(&self) -> Vec<String> {
        self.search_tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn validate(&self, created_by: &str) -> Result<ProductPayload, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        errors.required("product_name", &self.product_name, "Product Name is required");
        errors.required("category", &self.category, "Category is required");
        errors.required("sub_category", &self.sub_category, "Sub-category is required");
        errors.required("product_type", &self.product_type, "Product type is required");
        errors.required("make", &self.make, "Make is required");
        errors.required("model", &self.model, "Model is required");
        errors.required("variant", &self.variant, "Variant is required");
        errors.required("return_policy", &self.return_policy, "Return Policy is required");

        let no_of_stock = errors.integer("no_of_stock", &self.no_of_stock, 0, "No. of Stock must be an integer");
        let hsn_code = optional_integer(&mut errors, "hsn_code", &self.hsn_code, "HSN code must be a number");
        let warranty = optional_integer(&mut errors, "warranty", &self.warranty, "Warranty must be a number");
        let weight = optional_number(&mut errors, "weight", &self.weight, "Weight must be a positive number");
        if weight.is_some_and(|w| w < 0.0) {
            errors.add("weight", "Weight must be a positive number");
        }

        let mrp_with_gst = errors.min_number("mrp_with_gst", &self.mrp_with_gst, 1.0, "MRP is required");
        let gst_percentage = errors.min_number("gst_percentage", &self.gst_percentage, 1.0, "GST is required");
        let selling_price = errors.min_number("selling_price", &self.selling_price, 1.0, "Selling Price is required");

        let mut dealer_assignments = Vec::with_capacity(self.dealer_assignments.len());
        for (idx, row) in self.dealer_assignments.iter().enumerate() {
            match row.validate() {
                Ok(assignment) => dealer_assignments.push(assignment),
                Err(row_errors) => errors.merge_nested(&format!("dealerAssignments.{idx}"), row_errors),
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ProductPayload {
            manufacturer_part_name: optional_text(&self.manufacturer_part_name),
            product_name: self.product_name.trim().to_string(),
            hsn_code,
            category: self.category.clone(),
            sub_category: self.sub_category.clone(),
            product_type: self.product_type.clone(),
            no_of_stock: no_of_stock.unwrap_or_default(),
            vehicle_type: optional_text(&self.vehicle_type),
            brand: optional_text(&self.brand),
            make: self.make.trim().to_string(),
            model: self.model.clone(),
            variant: self.variant.clone(),
            year_range: optional_text(&self.year_range),
            fitment_notes: optional_text(&self.fitment_notes),
            is_universal: self.is_universal,
            is_consumable: self.is_consumable,
            key_specifications: optional_text(&self.key_specifications),
            weight,
            certifications: optional_text(&self.certifications),
            warranty,
            video_url: optional_text(&self.video_url),
            mrp_with_gst: mrp_with_gst.unwrap_or_default(),
            gst_percentage: gst_percentage.unwrap_or_default(),
            selling_price: selling_price.unwrap_or_default(),
            is_returnable: self.is_returnable,
            return_policy: self.return_policy.trim().to_string(),
            dealer_assignments,
            admin_notes: optional_text(&self.admin_notes),
            seo_title: optional_text(&self.seo_title),
            search_tags: self.search_tag_list(),
            seo_description: optional_text(&self.seo_description),
            created_by: created_by.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ProductForm {
        let mut form = ProductForm {
            product_name: "Brake Pad".into(),
            product_type: "OE".into(),
            no_of_stock: "12".into(),
            mrp_with_gst: "1499".into(),
            gst_percentage: "18".into(),
            selling_price: "1299".into(),
            return_policy: "7 days".into(),
            make: "Maruti Suzuki".into(),
            search_tags: "brake, pad,, front ".into(),
            ..Default::default()
        };
        form.apply_category_chain(&[Some("c1".into()), Some("s1".into())]);
        form.apply_vehicle_chain(&[Some("t1".into()), Some("b1".into()), Some("m1".into()), Some("v1".into())]);
        form
    }

    #[test]
    fn test_valid_form_builds_payload() {
        let payload = filled().validate("u1").unwrap();
        assert_eq!(payload.make, "Maruti Suzuki");
        assert_eq!(payload.brand.as_deref(), Some("b1"));
        assert!(!payload.is_returnable);
        assert_eq!(payload.sub_category, "s1");
        assert_eq!(payload.search_tags, ["brake", "pad", "front"]);
        assert_eq!(payload.no_of_stock, 12);
        assert_eq!(payload.created_by, "u1");

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["dealerAssignments"], serde_json::json!([]));
        assert!(json.get("weight").is_none());
    }

    #[test]
    fn test_required_and_minimums() {
        let mut form = filled();
        form.product_name.clear();
        form.gst_percentage = "0".into();
        form.no_of_stock = "1.5".into();
        form.apply_vehicle_chain(&[Some("t1".into()), Some("b2".into()), None, None]);

        let errors = form.validate("u1").unwrap_err();
        assert_eq!(errors.get("product_name"), Some("Product Name is required"));
        assert_eq!(errors.get("gst_percentage"), Some("GST is required"));
        assert_eq!(errors.get("no_of_stock"), Some("No. of Stock must be an integer"));
        assert_eq!(errors.get("model"), Some("Model is required"));
        assert_eq!(errors.get("variant"), Some("Variant is required"));
        assert_eq!(errors.get("make"), None);
    }

    #[test]
    fn test_typed_make_is_independent_of_brand() {
        let mut form = filled();
        form.apply_vehicle_chain(&[Some("t1".into()), None, None, None]);
        assert_eq!(form.make, "Maruti Suzuki");
        assert_eq!(form.brand, "");

        form.apply_vehicle_chain(&[Some("t1".into()), Some("b1".into()), Some("m1".into()), Some("v1".into())]);
        let payload = form.validate("u1").unwrap();
        assert_eq!(payload.make, "Maruti Suzuki");
        assert_eq!(payload.brand.as_deref(), Some("b1"));

        form.make = "  ".into();
        form.apply_vehicle_chain(&[Some("t1".into()), None, Some("m1".into()), Some("v1".into())]);
        let errors = form.validate("u1").unwrap_err();
        assert_eq!(errors.get("make"), Some("Make is required"));
        assert_eq!(errors.get("brand"), None);

        form.make = "Tata".into();
        let payload = form.validate("u1").unwrap();
        assert!(payload.brand.is_none());
        assert!(serde_json::to_value(&payload).unwrap().get("brand").is_none());
    }

    #[test]
    fn test_dealer_assignment_rows() {
        let mut form = filled();
        form.add_assignment();
        form.add_assignment();
        form.dealer_assignments[0].dealer_id = "d1".into();
        form.dealer_assignments[1].quantity = "0".into();

        let dealers = vec![SelectOption::new("d1", "Alpha Motors"), SelectOption::new("d2", "Beta Parts")];
        let for_second = form.available_dealers(1, &dealers);
        assert_eq!(for_second, vec![SelectOption::new("d2", "Beta Parts")]);
        assert_eq!(form.available_dealers(0, &dealers).len(), 2);

        let errors = form.validate("u1").unwrap_err();
        assert_eq!(errors.get("dealerAssignments.1.dealerId"), Some("Dealer is required"));
        assert_eq!(errors.get("dealerAssignments.1.quantity"), Some("Quantity must be at least 1"));
        assert_eq!(errors.get("dealerAssignments.0.quantity"), None);

        form.remove_assignment(1);
        let payload = form.validate("u1").unwrap();
        assert_eq!(payload.dealer_assignments[0].quantity, 1);
    }
}
