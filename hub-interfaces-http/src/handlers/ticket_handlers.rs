use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;

use hub_application::commands::ticket_commands;
use hub_application::queries::ticket_queries::{self, TicketStatusView};
use hub_application::AppState;
use hub_domain::{NewTicket, Ticket, TicketListQuery, TicketSummary, TicketUpdate};

use crate::error::HttpError;
use crate::middleware::{authorize, content_type, resident};

pub async fn list_tickets(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<TicketListQuery>,
) -> Result<Json<Vec<Ticket>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    Ok(Json(ticket_queries::list_tickets(&state, query).await))
}

pub async fn create_ticket(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<NewTicket>,
) -> Result<(StatusCode, Json<Ticket>), HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let reporter = resident(&state, &headers).await;
    let ticket = ticket_commands::create_ticket(&state, payload, reporter.as_ref()).await?;
    Ok((StatusCode::CREATED, Json(ticket)))
}

pub async fn ticket_summary(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<TicketSummary>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    Ok(Json(ticket_queries::ticket_summary(&state).await))
}

pub async fn get_ticket(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(ticket_id): Path<String>,
) -> Result<Json<TicketStatusView>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    Ok(Json(ticket_queries::ticket_status(&state, &ticket_id).await?))
}

pub async fn update_ticket(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(ticket_id): Path<String>,
    Json(payload): Json<TicketUpdate>,
) -> Result<Json<Ticket>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    Ok(Json(
        ticket_commands::update_ticket(&state, &ticket_id, payload).await?,
    ))
}

pub async fn attach_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(ticket_id): Path<String>,
    body: axum::body::Bytes,
) -> Result<Json<Ticket>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let content_type = content_type(&headers, "application/octet-stream");
    let ticket =
        ticket_commands::attach_image(&state, &ticket_id, &content_type, body.to_vec()).await?;
    Ok(Json(ticket))
}
