use serde::{Deserialize, Serialize};

/// `ticketType` of a support ticket. Order tickets are raised by end users
/// against an order and listed under the "User" tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TicketType {
    #[default]
    General,
    Order,
}

impl TicketType {
    pub fn code(&self) -> &'static str {
        match self {
            TicketType::General => "General",
            TicketType::Order => "Order",
        }
    }

    /// Tab label in the tickets page.
    pub fn tab_label(&self) -> &'static str {
        match self {
            TicketType::General => "General",
            TicketType::Order => "User",
        }
    }

    pub fn all() -> Vec<TicketType> {
        vec![TicketType::General, TicketType::Order]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.code() == code)
    }
}
