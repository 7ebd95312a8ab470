use crate::domain::reference::{ref_id, EntityRef};
use crate::shared::list_processor::{Searchable, Sortable};
use crate::shared::lookup::LookupTables;
use crate::shared::select_option::SelectOption;
use serde::{Deserialize, Serialize};

/// Lookup table key for the vehicle-type column.
pub const VEHICLE_TYPE_LOOKUP: &str = "vehicleType";

// ============================================================================
// Category
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(rename = "category_name", default)]
    pub name: Option<String>,
    #[serde(rename = "category_code", default)]
    pub code: Option<String>,
    #[serde(rename = "category_Status", default)]
    pub status: Option<String>,
    /// Vehicle type, sent under `type` by newer endpoints.
    #[serde(rename = "type", default)]
    pub vehicle_type: Option<EntityRef>,
    #[serde(rename = "vehicleType_id", default)]
    pub vehicle_type_id: Option<String>,
    #[serde(default)]
    pub category_image: Option<String>,
}

impl Category {
    /// Foreign key of the vehicle type: `type` first, then `vehicleType_id`.
    pub fn vehicle_type_key(&self) -> Option<&str> {
        ref_id(&self.vehicle_type).or_else(|| {
            self.vehicle_type_id
                .as_deref()
                .filter(|id| !id.is_empty())
        })
    }

    pub fn display_name(&self) -> &str {
        non_empty(&self.name).unwrap_or("No Title")
    }

    pub fn display_code(&self) -> &str {
        non_empty(&self.code).unwrap_or("No Code")
    }

    pub fn display_status(&self) -> &str {
        non_empty(&self.status).unwrap_or("Draft")
    }

    pub fn is_created(&self) -> bool {
        self.status.as_deref() == Some("Created")
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl Searchable for Category {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            self.name.as_deref(),
            self.code.as_deref(),
            self.status.as_deref(),
        ]
    }
}

impl Sortable for Category {
    fn sort_key(&self, field: &str, lookups: &LookupTables) -> Option<String> {
        match field {
            "name" => Some(self.name.clone().unwrap_or_default()),
            "code" => Some(self.code.clone().unwrap_or_default()),
            "status" => Some(self.status.clone().unwrap_or_default()),
            "vehicleType" => Some(lookups.resolve(VEHICLE_TYPE_LOOKUP, self.vehicle_type_key())),
            _ => None,
        }
    }
}

impl From<Category> for SelectOption {
    fn from(c: Category) -> Self {
        let label = c.display_name().to_string();
        SelectOption::new(c.id, label)
    }
}

// ============================================================================
// Subcategory
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subcategory {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(rename = "subcategory_name", default)]
    pub name: Option<String>,
    #[serde(rename = "category_ref", alias = "category", default)]
    pub category: Option<EntityRef>,
    #[serde(rename = "subcategory_status", default)]
    pub status: Option<String>,
}

impl From<Subcategory> for SelectOption {
    fn from(s: Subcategory) -> Self {
        let parent = ref_id(&s.category).map(str::to_string);
        let option = SelectOption::new(s.id.clone(), s.name.unwrap_or(s.id));
        match parent {
            Some(p) => option.with_parent(p),
            None => option,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_processor::derive;
    use crate::shared::list_query::{ListQuery, SortDirection};
    use crate::shared::lookup::LookupTable;
    use crate::shared::normalize::normalize_collection;
    use serde_json::json;

    fn categories() -> Vec<Category> {
        let body = json!({
            "data": [
                { "_id": "c1", "category_name": "Brakes", "category_code": "BRK", "category_Status": "Created", "type": "t2" },
                { "_id": "c2", "category_name": "Filters", "category_code": "FLT", "vehicleType_id": "t1" },
                { "_id": "c3", "category_code": "LGT", "category_Status": "Pending", "type": { "_id": "t9", "type_name": "Boat" } },
                { "_id": "c4", "category_name": "Wipers", "category_code": "WPR" }
            ]
        });
        normalize_collection("categories", body).unwrap()
    }

    fn lookups() -> LookupTables {
        let mut types = LookupTable::new("Vehicle Type");
        types.insert("t1", "Bike");
        types.insert("t2", "Car");
        LookupTables::new().with(VEHICLE_TYPE_LOOKUP, types)
    }

    fn ids(rows: &[Category]) -> Vec<&str> {
        rows.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_display_fallbacks() {
        let rows = categories();
        assert_eq!(rows[2].display_name(), "No Title");
        assert_eq!(rows[3].display_status(), "Draft");
        assert!(rows[0].is_created());
        assert_eq!(rows[1].vehicle_type_key(), Some("t1"));
        assert_eq!(rows[2].vehicle_type_key(), Some("t9"));
    }

    #[test]
    fn test_search_covers_name_code_status() {
        let rows = categories();
        let mut query = ListQuery::new(10);
        query.set_search("pend");
        assert_eq!(ids(&derive(&rows, &query, &lookups()).page_rows), ["c3"]);
        query.set_search("flt");
        assert_eq!(ids(&derive(&rows, &query, &lookups()).page_rows), ["c2"]);
    }

    #[test]
    fn test_sort_by_vehicle_type_name() {
        let rows = categories();
        // Bike, Car, No Vehicle Type, Unknown Vehicle Type
        let query = ListQuery::new(10).sorted_by("vehicleType", SortDirection::Asc);
        assert_eq!(ids(&derive(&rows, &query, &lookups()).page_rows), ["c2", "c1", "c4", "c3"]);

        let query = ListQuery::new(10).sorted_by("name", SortDirection::Desc);
        assert_eq!(ids(&derive(&rows, &query, &lookups()).page_rows), ["c4", "c2", "c1", "c3"]);
    }
}
