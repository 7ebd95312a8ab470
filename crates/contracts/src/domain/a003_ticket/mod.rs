pub mod aggregate;
pub mod filters;

pub use aggregate::{Ticket, TicketStatusUpdate};
pub use filters::{TabCounts, TicketFilters};
