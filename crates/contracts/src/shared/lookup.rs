//! Side tables that resolve foreign keys (e.g. a vehicle type id) into the
//! display names shown and sorted on in list pages.

use super::select_option::SelectOption;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct LookupTable {
    entity: String,
    labels: HashMap<String, String>,
}

impl LookupTable {
    /// `entity` is the human name used in fallbacks: "No {entity}" / "Unknown {entity}".
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            labels: HashMap::new(),
        }
    }

    pub fn from_options(entity: impl Into<String>, options: &[SelectOption]) -> Self {
        let mut table = Self::new(entity);
        for option in options {
            table.insert(option.id.clone(), option.label.clone());
        }
        table
    }

    pub fn insert(&mut self, id: impl Into<String>, label: impl Into<String>) {
        self.labels.insert(id.into(), label.into());
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Display name for `key`. Never fails: missing keys and unknown ids map
    /// to placeholder names so sorting and rendering stay total.
    pub fn resolve(&self, key: Option<&str>) -> String {
        match key.map(str::trim) {
            None | Some("") => format!("No {}", self.entity),
            Some(id) => self
                .labels
                .get(id)
                .cloned()
                .unwrap_or_else(|| format!("Unknown {}", self.entity)),
        }
    }
}

/// Lookup tables keyed by the list field they resolve.
#[derive(Debug, Clone, Default)]
pub struct LookupTables {
    tables: HashMap<String, LookupTable>,
}

impl LookupTables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: impl Into<String>, table: LookupTable) -> Self {
        self.tables.insert(field.into(), table);
        self
    }

    pub fn get(&self, field: &str) -> Option<&LookupTable> {
        self.tables.get(field)
    }

    /// Resolves `key` through the table registered for `field`. Without a
    /// registered table the raw key is used as its own display value.
    pub fn resolve(&self, field: &str, key: Option<&str>) -> String {
        match self.tables.get(field) {
            Some(table) => table.resolve(key),
            None => key.unwrap_or_default().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle_types() -> LookupTable {
        LookupTable::from_options(
            "Vehicle Type",
            &[
                SelectOption::new("t1", "Car"),
                SelectOption::new("t2", "Motorcycle"),
            ],
        )
    }

    #[test]
    fn test_resolve_known_and_fallbacks() {
        let table = vehicle_types();
        assert_eq!(table.resolve(Some("t2")), "Motorcycle");
        assert_eq!(table.resolve(Some("t9")), "Unknown Vehicle Type");
        assert_eq!(table.resolve(None), "No Vehicle Type");
        assert_eq!(table.resolve(Some("  ")), "No Vehicle Type");
    }

    #[test]
    fn test_tables_without_registered_field_use_raw_key() {
        let tables = LookupTables::new().with("vehicleType", vehicle_types());
        assert_eq!(tables.resolve("vehicleType", Some("t1")), "Car");
        assert_eq!(tables.resolve("status", Some("Active")), "Active");
        assert_eq!(tables.resolve("status", None), "");
    }
}
