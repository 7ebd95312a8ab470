use crate::enums::ticket_status::TicketStatus;
use crate::enums::ticket_type::TicketType;
use crate::shared::list_processor::{Searchable, Sortable};
use crate::shared::lookup::LookupTables;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(rename = "ticketNumber", alias = "ticket_id", default)]
    pub ticket_number: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "ticketType", default)]
    pub ticket_type: TicketType,
    /// Raw status; unknown values are kept so the row still renders.
    #[serde(default)]
    pub status: String,
    #[serde(rename = "userRef", default)]
    pub user_ref: Option<String>,
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub assigned: bool,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub admin_notes: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Ticket {
    pub fn status_kind(&self) -> Option<TicketStatus> {
        TicketStatus::from_code(&self.status)
    }

    pub fn is_assigned(&self) -> bool {
        self.assigned || self.assigned_to.as_deref().is_some_and(|a| !a.is_empty())
    }

    pub fn display_number(&self) -> &str {
        self.ticket_number.as_deref().unwrap_or(&self.id)
    }
}

impl Searchable for Ticket {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            self.ticket_number.as_deref(),
            self.subject.as_deref(),
            self.description.as_deref(),
            Some(self.status.as_str()),
            self.user_ref.as_deref(),
            self.order_id.as_deref(),
        ]
    }
}

impl Sortable for Ticket {
    fn sort_key(&self, field: &str, _lookups: &LookupTables) -> Option<String> {
        match field {
            "ticket" => Some(self.display_number().to_string()),
            "subject" => Some(self.subject.clone().unwrap_or_default()),
            "status" => Some(self.status.clone()),
            "type" => Some(self.ticket_type.code().to_string()),
            // RFC 3339 in UTC sorts chronologically as text
            "created" => Some(
                self.created_at
                    .map(|t| t.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string())
                    .unwrap_or_default(),
            ),
            _ => None,
        }
    }
}

/// Body of `PATCH /orders/api/tickets/updateStatus/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketStatusUpdate {
    pub status: TicketStatus,
    pub admin_notes: String,
    pub updated_by: String,
}
