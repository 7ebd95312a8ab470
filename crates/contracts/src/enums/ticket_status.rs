use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketStatus {
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Pending,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub fn code(&self) -> &'static str {
        match self {
            TicketStatus::Open => "Open",
            TicketStatus::InProgress => "In Progress",
            TicketStatus::Pending => "Pending",
            TicketStatus::Resolved => "Resolved",
            TicketStatus::Closed => "Closed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        self.code()
    }

    pub fn all() -> Vec<TicketStatus> {
        vec![
            TicketStatus::Open,
            TicketStatus::InProgress,
            TicketStatus::Pending,
            TicketStatus::Resolved,
            TicketStatus::Closed,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }

    /// Badge color class used by the tickets table.
    pub fn badge_class(&self) -> &'static str {
        match self {
            TicketStatus::Open => "badge badge--info",
            TicketStatus::InProgress => "badge badge--warning",
            TicketStatus::Pending => "badge badge--muted",
            TicketStatus::Resolved => "badge badge--success",
            TicketStatus::Closed => "badge badge--neutral",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, TicketStatus::Resolved | TicketStatus::Closed)
    }
}
