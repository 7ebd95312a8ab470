//! Vehicle catalog records feeding the Vehicle Type → Brand → Model → Variant
//! cascade. Only the fields the dropdowns need are kept.

use crate::domain::reference::{ref_id, EntityRef};
use crate::shared::select_option::SelectOption;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleType {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(rename = "type_name", alias = "name", default)]
    pub name: String,
    #[serde(default)]
    pub type_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(rename = "brand_name", alias = "name", default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub vehicle_type: Option<EntityRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(rename = "model_name", alias = "name", default)]
    pub name: String,
    #[serde(rename = "brand_ref", alias = "brand", default)]
    pub brand: Option<EntityRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(rename = "variant_name", alias = "name", default)]
    pub name: String,
    #[serde(default)]
    pub model: Option<EntityRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearRange {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(rename = "year_name", alias = "name", default)]
    pub name: String,
}

fn option(id: String, name: String, parent: Option<&str>) -> SelectOption {
    let label = if name.trim().is_empty() { id.clone() } else { name };
    let option = SelectOption::new(id, label);
    match parent {
        Some(p) => option.with_parent(p),
        None => option,
    }
}

impl From<VehicleType> for SelectOption {
    fn from(v: VehicleType) -> Self {
        option(v.id, v.name, None)
    }
}

impl From<Brand> for SelectOption {
    fn from(b: Brand) -> Self {
        let parent = ref_id(&b.vehicle_type).map(str::to_string);
        option(b.id, b.name, parent.as_deref())
    }
}

impl From<Model> for SelectOption {
    fn from(m: Model) -> Self {
        let parent = ref_id(&m.brand).map(str::to_string);
        option(m.id, m.name, parent.as_deref())
    }
}

impl From<Variant> for SelectOption {
    fn from(v: Variant) -> Self {
        let parent = ref_id(&v.model).map(str::to_string);
        option(v.id, v.name, parent.as_deref())
    }
}

impl From<YearRange> for SelectOption {
    fn from(y: YearRange) -> Self {
        option(y.id, y.name, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::normalize::normalize_collection;
    use crate::shared::select_option::to_options;
    use serde_json::json;

    #[test]
    fn test_brands_to_options() {
        let body = json!({
            "success": true,
            "data": [
                { "_id": "b1", "brand_name": "Acme", "type": "t1" },
                { "_id": "b2", "brand_name": "", "type": { "_id": "t1", "type_name": "Car" } }
            ]
        });
        let brands: Vec<Brand> = normalize_collection("brands", body).unwrap();
        let options = to_options(brands);
        assert_eq!(options[0], SelectOption::new("b1", "Acme").with_parent("t1"));
        assert_eq!(options[1].label, "b2");
        assert_eq!(options[1].parent_id.as_deref(), Some("t1"));
    }

    #[test]
    fn test_models_accept_brand_ref() {
        let model: Model =
            serde_json::from_value(json!({ "_id": "m1", "model_name": "Swift", "brand_ref": "b1" })).unwrap();
        let option = SelectOption::from(model);
        assert_eq!(option.label, "Swift");
        assert_eq!(option.parent_id.as_deref(), Some("b1"));
    }
}
