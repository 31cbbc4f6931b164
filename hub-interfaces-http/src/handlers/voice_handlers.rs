use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use tracing::error;

use hub_application::commands::voice_commands;
use hub_application::AppState;
use hub_domain::{SpeakRequest, SpeechAudio, TranscriptRequest, VoiceOutcome};

use crate::error::HttpError;
use crate::middleware::{authorize, content_type, maybe_gunzip, resident};

pub async fn submit_transcript(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<TranscriptRequest>,
) -> Result<Json<VoiceOutcome>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let speaker = resident(&state, &headers).await;
    let outcome = voice_commands::handle_transcript(&state, &payload.transcript, speaker).await?;
    Ok(Json(outcome))
}

/// Transcription runs as a task that is aborted if the client goes away.
pub async fn submit_audio(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: axum::body::Bytes,
) -> Result<Json<VoiceOutcome>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let audio = maybe_gunzip(&headers, &body).map_err(|err| {
        error!("failed to inflate audio body: {}", err);
        HttpError::BadRequest(err.to_string())
    })?;
    let speaker = resident(&state, &headers).await;
    let task = voice_commands::spawn_transcription(
        &state,
        audio,
        content_type(&headers, "audio/webm"),
        speaker,
    );
    Ok(Json(task.wait().await?))
}

pub async fn speak(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SpeakRequest>,
) -> Result<Json<SpeechAudio>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    Ok(Json(voice_commands::speak(&state, payload).await?))
}
