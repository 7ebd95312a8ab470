use crate::domain::reference::{ref_id, EntityRef};
use crate::shared::list_processor::{Searchable, Sortable};
use crate::shared::lookup::LookupTables;
use serde::{Deserialize, Serialize};

/// Lookup table key for the category column.
pub const CATEGORY_LOOKUP: &str = "category";

/// A row of the products list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub sku_code: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub manufacturer_part_name: Option<String>,
    #[serde(default)]
    pub brand: Option<EntityRef>,
    #[serde(default)]
    pub category: Option<EntityRef>,
    #[serde(default)]
    pub sub_category: Option<EntityRef>,
    #[serde(default)]
    pub product_type: Option<String>,
    #[serde(default)]
    pub mrp_with_gst: Option<f64>,
    #[serde(default)]
    pub selling_price: Option<f64>,
    #[serde(default)]
    pub no_of_stock: Option<i64>,
    #[serde(default)]
    pub live_status: Option<String>,
}

impl Product {
    pub fn display_name(&self) -> &str {
        self.product_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or("Unnamed product")
    }

    pub fn category_key(&self) -> Option<&str> {
        ref_id(&self.category)
    }

    /// Category label: populated name first, then the lookup table.
    pub fn category_label(&self, lookups: &LookupTables) -> String {
        match self.category.as_ref().and_then(EntityRef::name) {
            Some(name) => name.to_string(),
            None => lookups.resolve(CATEGORY_LOOKUP, self.category_key()),
        }
    }

    pub fn brand_name(&self) -> Option<&str> {
        self.brand.as_ref().and_then(EntityRef::name)
    }
}

/// Zero-padded so string order equals numeric order for non-negative values.
fn numeric_key(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:020.2}", v.max(0.0)))
        .unwrap_or_default()
}

impl Searchable for Product {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            self.product_name.as_deref(),
            self.sku_code.as_deref(),
            self.manufacturer_part_name.as_deref(),
            self.brand_name(),
            self.category.as_ref().and_then(EntityRef::name),
            self.live_status.as_deref(),
        ]
    }
}

impl Sortable for Product {
    fn sort_key(&self, field: &str, lookups: &LookupTables) -> Option<String> {
        match field {
            "name" => Some(self.product_name.clone().unwrap_or_default()),
            "sku" => Some(self.sku_code.clone().unwrap_or_default()),
            "category" => Some(self.category_label(lookups)),
            "price" => Some(numeric_key(self.selling_price)),
            "mrp" => Some(numeric_key(self.mrp_with_gst)),
            "stock" => Some(numeric_key(self.no_of_stock.map(|s| s as f64))),
            "status" => Some(self.live_status.clone().unwrap_or_default()),
            _ => None,
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

    fn products() -> Vec<Product> {
        let body = json!({
            "success": true,
            "data": {
                "products": [
                    { "_id": "p1", "product_name": "Brake Pad", "sku_code": "TOP-BP-1", "selling_price": 1200.0, "category": "c1" },
                    { "_id": "p2", "product_name": "Air Filter", "sku_code": "TOP-AF-2", "selling_price": 350.5,
                      "category": { "_id": "c2", "category_name": "Filters" }, "brand": { "_id": "b1", "brand_name": "Bosch" } },
                    { "_id": "p3", "product_name": "Brake Disc", "sku_code": "TOP-BD-3", "selling_price": 99.0 }
                ]
            }
        });
        normalize_collection("products", body).unwrap()
    }

    fn ids(rows: &[Product]) -> Vec<&str> {
        rows.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_search_brake_and_brand() {
        let rows = products();
        let mut query = ListQuery::new(10);
        query.set_search("brake");
        assert_eq!(ids(&derive(&rows, &query, &LookupTables::new()).page_rows), ["p1", "p3"]);
        query.set_search("bosch");
        assert_eq!(ids(&derive(&rows, &query, &LookupTables::new()).page_rows), ["p2"]);
    }

    #[test]
    fn test_numeric_sort_by_price() {
        let rows = products();
        let query = ListQuery::new(10).sorted_by("price", SortDirection::Asc);
        assert_eq!(ids(&derive(&rows, &query, &LookupTables::new()).page_rows), ["p3", "p2", "p1"]);
    }

    #[test]
    fn test_category_label_prefers_populated_name() {
        let rows = products();
        let mut table = LookupTable::new("Category");
        table.insert("c1", "Brakes");
        let lookups = LookupTables::new().with(CATEGORY_LOOKUP, table);
        assert_eq!(rows[0].category_label(&lookups), "Brakes");
        assert_eq!(rows[1].category_label(&lookups), "Filters");
        assert_eq!(rows[2].category_label(&lookups), "No Category");
    }
}
