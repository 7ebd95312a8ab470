//! Pre-filters of the tickets page, applied before the list processor.

use super::aggregate::Ticket;
use crate::enums::date_range::DateRange;
use crate::enums::ticket_status::TicketStatus;
use crate::enums::ticket_type::TicketType;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TicketFilters {
    pub status: Option<TicketStatus>,
    pub assigned: Option<bool>,
    pub date_range: Option<DateRange>,
}

impl TicketFilters {
    /// Empty code means "all".
    pub fn set_status_code(&mut self, code: &str) {
        self.status = TicketStatus::from_code(code);
    }

    pub fn set_assigned_code(&mut self, code: &str) {
        self.assigned = match code {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        };
    }

    pub fn set_date_range_code(&mut self, code: &str) {
        self.date_range = DateRange::from_code(code);
    }

    pub fn active_count(&self) -> usize {
        [
            self.status.is_some(),
            self.assigned.is_some(),
            self.date_range.is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Tickets without a creation time never match a date range.
    pub fn matches(&self, ticket: &Ticket, now: DateTime<Utc>) -> bool {
        if let Some(status) = self.status {
            if ticket.status_kind() != Some(status) {
                return false;
            }
        }
        if let Some(assigned) = self.assigned {
            if ticket.is_assigned() != assigned {
                return false;
            }
        }
        if let Some(range) = self.date_range {
            match ticket.created_at {
                Some(at) if range.contains(at, now) => {}
                _ => return false,
            }
        }
        true
    }

    /// Tickets of `tab` that pass every filter, in input order.
    pub fn apply(&self, tickets: &[Ticket], tab: TicketType, now: DateTime<Utc>) -> Vec<Ticket> {
        tickets
            .iter()
            .filter(|t| t.ticket_type == tab && self.matches(t, now))
            .cloned()
            .collect()
    }
}

/// Badge counts on the tab bar; computed on the unfiltered collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabCounts {
    pub general: usize,
    pub order: usize,
}

impl TabCounts {
    pub fn of(tickets: &[Ticket]) -> Self {
        tickets.iter().fold(Self::default(), |mut acc, t| {
            match t.ticket_type {
                TicketType::General => acc.general += 1,
                TicketType::Order => acc.order += 1,
            }
            acc
        })
    }

    pub fn get(&self, tab: TicketType) -> usize {
        match tab {
            TicketType::General => self.general,
            TicketType::Order => self.order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::normalize::normalize_collection;
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-03-18T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn tickets() -> Vec<Ticket> {
        let body = json!({
            "success": true,
            "data": [
                { "_id": "1", "ticketType": "General", "status": "Open", "createdAt": "2025-03-18T09:00:00Z" },
                { "_id": "2", "ticketType": "General", "status": "Resolved", "assigned_to": "e1", "createdAt": "2025-03-02T09:00:00Z" },
                { "_id": "3", "ticketType": "Order", "status": "Open", "assigned": true, "createdAt": "2025-03-14T09:00:00Z" },
                { "_id": "4", "ticketType": "Order", "status": "In Progress" },
                { "_id": "5", "ticketType": "General", "status": "Escalated", "createdAt": "2025-02-10T09:00:00Z" }
            ]
        });
        normalize_collection("tickets", body).unwrap()
    }

    fn ids(rows: &[Ticket]) -> Vec<&str> {
        rows.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_tab_counts_use_ticket_type() {
        let counts = TabCounts::of(&tickets());
        assert_eq!(counts, TabCounts { general: 3, order: 2 });
        assert_eq!(counts.get(TicketType::Order), 2);
    }

    #[test]
    fn test_no_filters_keeps_tab() {
        let rows = tickets();
        let filters = TicketFilters::default();
        assert_eq!(ids(&filters.apply(&rows, TicketType::General, now())), ["1", "2", "5"]);
        assert_eq!(filters.active_count(), 0);
    }

    #[test]
    fn test_status_assigned_and_date() {
        let rows = tickets();
        let mut filters = TicketFilters::default();
        filters.set_status_code("Open");
        assert_eq!(ids(&filters.apply(&rows, TicketType::Order, now())), ["3"]);

        filters.set_status_code("");
        filters.set_assigned_code("true");
        assert_eq!(ids(&filters.apply(&rows, TicketType::General, now())), ["2"]);

        filters.set_assigned_code("false");
        filters.set_date_range_code("week");
        assert_eq!(ids(&filters.apply(&rows, TicketType::General, now())), ["1"]);
        assert_eq!(filters.active_count(), 2);

        filters.set_assigned_code("");
        filters.set_date_range_code("month");
        assert_eq!(ids(&filters.apply(&rows, TicketType::General, now())), ["1", "2"]);
        // no creation time: excluded by any date range
        assert!(filters.apply(&rows, TicketType::Order, now()).iter().all(|t| t.id != "4"));

        filters.reset();
        assert_eq!(filters, TicketFilters::default());
    }

    #[test]
    fn test_unknown_status_survives() {
        let rows = tickets();
        assert_eq!(rows[4].status, "Escalated");
        assert_eq!(rows[4].status_kind(), None);
        assert_eq!(rows[3].status_kind(), Some(TicketStatus::InProgress));
    }
}
