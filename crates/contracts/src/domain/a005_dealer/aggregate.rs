use crate::shared::list_processor::{Searchable, Sortable};
use crate::shared::lookup::LookupTables;
use crate::shared::select_option::SelectOption;
use crate::system::users::{DirectoryEntry, UserKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub pincode: String,
    #[serde(default)]
    pub state: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactPerson {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dealer {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub dealer_id: Option<String>,
    #[serde(default)]
    pub legal_name: Option<String>,
    #[serde(default)]
    pub trade_name: Option<String>,
    #[serde(rename = "GSTIN", default)]
    pub gstin: Option<String>,
    #[serde(rename = "Pan", default)]
    pub pan: Option<String>,
    #[serde(rename = "Address", default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub contact_person: Option<ContactPerson>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub default_margin: Option<f64>,
    #[serde(rename = "SLA_type", default)]
    pub sla_type: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub categories_allowed: Vec<String>,
}

impl Dealer {
    /// Legal name, then trade name, then the id.
    pub fn display_name(&self) -> &str {
        [self.legal_name.as_deref(), self.trade_name.as_deref()]
            .into_iter()
            .flatten()
            .find(|n| !n.is_empty())
            .unwrap_or(&self.id)
    }

    pub fn city(&self) -> Option<&str> {
        self.address.as_ref().map(|a| a.city.as_str()).filter(|c| !c.is_empty())
    }

    pub fn status_label(&self) -> &'static str {
        match self.is_active {
            Some(false) => "inactive",
            _ => "active",
        }
    }
}

impl Searchable for Dealer {
    fn search_fields(&self) -> Vec<Option<&str>> {
        let contact = self.contact_person.as_ref();
        vec![
            self.legal_name.as_deref(),
            self.trade_name.as_deref(),
            self.gstin.as_deref(),
            self.dealer_id.as_deref(),
            contact.map(|c| c.name.as_str()),
            contact.map(|c| c.email.as_str()),
            self.city(),
        ]
    }
}

impl Sortable for Dealer {
    fn sort_key(&self, field: &str, _lookups: &LookupTables) -> Option<String> {
        match field {
            "legalName" => Some(self.legal_name.clone().unwrap_or_default()),
            "tradeName" => Some(self.trade_name.clone().unwrap_or_default()),
            "city" => Some(self.city().unwrap_or_default().to_string()),
            "status" => Some(self.status_label().to_string()),
            _ => None,
        }
    }
}

impl DirectoryEntry for Dealer {
    const KIND: UserKind = UserKind::Dealer;

    fn role(&self) -> Option<&str> {
        self.role.as_deref().or(Some("dealer"))
    }

    fn status(&self) -> &str {
        self.status_label()
    }

    fn regions(&self) -> &[String] {
        &[]
    }
}

impl From<Dealer> for SelectOption {
    fn from(d: Dealer) -> Self {
        let label = d.display_name().to_string();
        SelectOption::new(d.id, label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dealer_labels() {
        let dealer: Dealer = serde_json::from_value(json!({
            "_id": "d1",
            "trade_name": "Beta Parts",
            "GSTIN": "29ABCDE1234F1Z5",
            "Address": { "city": "Pune" },
            "is_active": false
        }))
        .unwrap();
        assert_eq!(dealer.display_name(), "Beta Parts");
        assert_eq!(dealer.city(), Some("Pune"));
        assert_eq!(dealer.status_label(), "inactive");
        assert!(dealer.matches_filter("29abcde"));
        assert_eq!(SelectOption::from(dealer).label, "Beta Parts");
    }
}
