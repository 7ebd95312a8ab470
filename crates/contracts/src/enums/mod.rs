pub mod date_range;
pub mod role;
pub mod ticket_status;
pub mod ticket_type;
