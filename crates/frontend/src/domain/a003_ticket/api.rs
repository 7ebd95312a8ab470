use contracts::domain::a003_ticket::{Ticket, TicketStatusUpdate};
use contracts::shared::error::DashboardError;
use serde_json::Value;

use crate::shared::api_utils::scoped_path;
use crate::shared::http::{get_collection, patch_json};

pub async fn fetch_tickets() -> Result<Vec<Ticket>, DashboardError> {
    get_collection("tickets", "/orders/api/tickets").await
}

pub async fn update_ticket_status(id: &str, update: &TicketStatusUpdate) -> Result<(), DashboardError> {
    let path = scoped_path("/orders/api/tickets/updateStatus", id);
    let _: Value = patch_json("ticket status", &path, update).await?;
    Ok(())
}
