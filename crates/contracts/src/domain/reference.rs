use serde::{Deserialize, Serialize};

/// A foreign key the API sends either as a bare id or as a populated object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityRef {
    Id(String),
    Populated(PopulatedRef),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulatedRef {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(
        default,
        alias = "category_name",
        alias = "subcategory_name",
        alias = "type_name",
        alias = "brand_name",
        alias = "model_name",
        alias = "variant_name",
        alias = "legal_name"
    )]
    pub name: Option<String>,
}

impl EntityRef {
    pub fn id(&self) -> &str {
        match self {
            EntityRef::Id(id) => id,
            EntityRef::Populated(p) => &p.id,
        }
    }

    /// Display name when the API populated the reference.
    pub fn name(&self) -> Option<&str> {
        match self {
            EntityRef::Id(_) => None,
            EntityRef::Populated(p) => p.name.as_deref(),
        }
    }
}

/// Id of an optional reference, ignoring empty strings.
pub fn ref_id(r: &Option<EntityRef>) -> Option<&str> {
    r.as_ref().map(EntityRef::id).filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_and_populated() {
        let bare: EntityRef = serde_json::from_value(json!("65f0a1")).unwrap();
        assert_eq!(bare.id(), "65f0a1");
        assert_eq!(bare.name(), None);

        let populated: EntityRef =
            serde_json::from_value(json!({ "_id": "b1", "brand_name": "Bosch" })).unwrap();
        assert_eq!(populated.id(), "b1");
        assert_eq!(populated.name(), Some("Bosch"));

        assert_eq!(ref_id(&Some(EntityRef::Id(String::new()))), None);
    }
}
