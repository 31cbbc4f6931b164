// Halls, CCTV footage requests and reminders

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;

use hub_application::commands::{cctv_commands, hall_commands, reminder_commands};
use hub_application::queries::{cctv_queries, hall_queries, reminder_queries};
use hub_application::AppState;
use hub_domain::{
    normalize_optional_text, BookHallRequest, CctvRequest, Hall, HallBooking, NewCctvRequest,
    Reminder, ReminderBoard,
};

use crate::error::HttpError;
use crate::middleware::{authorize, resident};

pub async fn list_halls(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Hall>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    Ok(Json(hall_queries::list_halls(&state).await))
}

pub async fn book_hall(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(hall_id): Path<String>,
    payload: Option<Json<BookHallRequest>>,
) -> Result<(StatusCode, Json<HallBooking>), HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let requested = payload.and_then(|Json(body)| normalize_optional_text(body.booked_by));
    let booked_by = match requested {
        Some(name) => name,
        None => resident(&state, &headers)
            .await
            .map(|profile| profile.display_name)
            .unwrap_or_else(|| "Resident".to_string()),
    };
    let booking = hall_commands::book_hall(&state, &hall_id, booked_by).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

pub async fn monitored_areas(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<&'static str>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    Ok(Json(cctv_queries::monitored_areas()))
}

pub async fn list_cctv_requests(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<CctvRequest>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    Ok(Json(cctv_queries::list_cctv_requests(&state).await))
}

pub async fn submit_cctv_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<NewCctvRequest>,
) -> Result<(StatusCode, Json<CctvRequest>), HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let requested_by = resident(&state, &headers)
        .await
        .map(|profile| profile.display_name);
    let request = cctv_commands::submit_cctv_request(&state, payload, requested_by).await?;
    Ok((StatusCode::CREATED, Json(request)))
}

pub async fn reminder_board(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ReminderBoard>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    Ok(Json(reminder_queries::reminder_board(&state).await))
}

pub async fn mark_reminder_read(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(reminder_id): Path<String>,
) -> Result<Json<Reminder>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    Ok(Json(
        reminder_commands::mark_reminder_read(&state, &reminder_id).await?,
    ))
}
