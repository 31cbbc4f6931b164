use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;

use hub_application::commands::feedback_commands;
use hub_application::queries::analytics_queries;
use hub_application::AppState;
use hub_domain::{Feedback, FeedbackAnalytics, NewFeedback};

use crate::error::HttpError;
use crate::middleware::authorize;

pub async fn list_feedback(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Feedback>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    Ok(Json(analytics_queries::list_feedback(&state).await))
}

pub async fn submit_feedback(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<NewFeedback>,
) -> Result<(StatusCode, Json<Feedback>), HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let feedback = feedback_commands::submit_feedback(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(feedback)))
}

pub async fn feedback_analytics(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<FeedbackAnalytics>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    Ok(Json(analytics_queries::feedback_analytics(&state).await))
}
