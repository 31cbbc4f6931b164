use serde::Serialize;

use hub_domain::{
    summarize_tickets, Ticket, TicketListQuery, TicketSummary, TICKET_ID_MISSING_RESPONSE,
    TICKET_NOT_FOUND_RESPONSE,
};

use crate::{AppError, AppState};

const MAX_LIST_LIMIT: usize = 500;

#[derive(Debug, Clone, Serialize)]
pub struct TicketStatusView {
    pub ticket: Ticket,
    pub response: String,
}

/// Newest first, optionally filtered by status.
pub async fn list_tickets(state: &AppState, query: TicketListQuery) -> Vec<Ticket> {
    let mut tickets: Vec<Ticket> = {
        let tickets = state.tickets.read().await;
        tickets
            .iter()
            .filter(|ticket| query.status.map_or(true, |status| ticket.status == status))
            .cloned()
            .collect()
    };
    tickets.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    let limit = query.limit.unwrap_or(MAX_LIST_LIMIT).clamp(1, MAX_LIST_LIMIT);
    tickets.truncate(limit);
    tickets
}

/// Exact id match first, then the first ticket whose id contains the input.
pub async fn find_ticket(state: &AppState, ticket_id: &str) -> Option<Ticket> {
    let needle = ticket_id.trim();
    if needle.is_empty() {
        return None;
    }
    let tickets = state.tickets.read().await;
    tickets
        .iter()
        .find(|ticket| ticket.id.as_str() == needle)
        .or_else(|| tickets.iter().find(|ticket| ticket.id.as_str().contains(needle)))
        .cloned()
}

pub async fn ticket_status(state: &AppState, ticket_id: &str) -> Result<TicketStatusView, AppError> {
    let ticket = find_ticket(state, ticket_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("ticket {}", ticket_id.trim())))?;
    Ok(TicketStatusView {
        response: ticket.status_response(),
        ticket,
    })
}

/// Spoken-style answer for a status question; never fails.
pub async fn ticket_status_response(state: &AppState, ticket_id: Option<&str>) -> String {
    let Some(ticket_id) = ticket_id.filter(|id| !id.trim().is_empty()) else {
        return TICKET_ID_MISSING_RESPONSE.to_string();
    };
    match find_ticket(state, ticket_id).await {
        Some(ticket) => ticket.status_response(),
        None => TICKET_NOT_FOUND_RESPONSE.to_string(),
    }
}

pub async fn ticket_summary(state: &AppState) -> TicketSummary {
    let tickets = state.tickets.read().await;
    summarize_tickets(&tickets)
}
