use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;

use hub_application::commands::event_commands;
use hub_application::queries::event_queries;
use hub_application::AppState;
use hub_domain::EventRecommendation;

use crate::error::HttpError;
use crate::middleware::authorize;

pub async fn recommendations(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<EventRecommendation>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    Ok(Json(event_queries::recommend(&state)))
}

pub async fn list_selected(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<EventRecommendation>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    Ok(Json(event_queries::selected_events(&state).await))
}

/// 201 on first selection, 200 when the event was already selected.
pub async fn select_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<EventRecommendation>,
) -> Result<StatusCode, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    if event_commands::select_event(&state, payload).await? {
        Ok(StatusCode::CREATED)
    } else {
        Ok(StatusCode::OK)
    }
}
