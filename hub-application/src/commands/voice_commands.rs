use std::time::Duration;

use chrono::Utc;
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tracing::{error, info, warn};

use hub_domain::{
    route_utterance, DispatchedCommand, Notification, SpeakRequest, SpeechAudio, UserProfile,
    VoiceOutcome,
};

use crate::commands::notification_commands::post_notification;
use crate::{AppError, AppState};

/// Routes an utterance and hands the command to the hub. Unrecognized text is
/// dropped, but the transcript is still returned to the caller.
pub async fn handle_transcript(
    state: &AppState,
    transcript: &str,
    issued_by: Option<UserProfile>,
) -> Result<VoiceOutcome, AppError> {
    let transcript = transcript.trim();
    if transcript.is_empty() {
        return Err(AppError::BadRequest("transcript must not be empty".to_string()));
    }

    let Some(command) = route_utterance(transcript) else {
        state.metrics.record_dropped();
        warn!("no voice command matched: {:?}", transcript);
        return Ok(VoiceOutcome {
            transcript: transcript.to_string(),
            command: None,
            delivered_to: 0,
        });
    };

    let delivered_to = state
        .voice_hub
        .publish(DispatchedCommand {
            command: command.clone(),
            transcript: transcript.to_string(),
            issued_by,
            issued_at: Utc::now(),
        })
        .await;
    state.metrics.record_routed(delivered_to);
    if delivered_to == 0 {
        warn!("{} routed but nobody is subscribed", command.kind());
    } else {
        info!("{} delivered to {} consumers", command.kind(), delivered_to);
    }
    Ok(VoiceOutcome {
        transcript: transcript.to_string(),
        command: Some(command),
        delivered_to,
    })
}

/// Transcribes recorded audio and routes the result. Nothing is committed
/// unless transcription succeeds within `speech_timeout_seconds`.
pub async fn transcribe_and_route(
    state: &AppState,
    audio: Vec<u8>,
    content_type: &str,
    issued_by: Option<UserProfile>,
) -> Result<VoiceOutcome, AppError> {
    if audio.is_empty() {
        return Err(AppError::BadRequest("audio body must not be empty".to_string()));
    }
    let timeout_secs = state.config.speech_timeout_seconds.max(1);
    let transcribed = timeout(
        Duration::from_secs(timeout_secs),
        state.services.speech_to_text.transcribe(audio, content_type),
    )
    .await;
    let transcript = match transcribed {
        Ok(Ok(transcript)) => transcript,
        Ok(Err(err)) => {
            return Err(transcription_failed(state, format!("transcription failed: {}", err)).await)
        }
        Err(_) => {
            return Err(transcription_failed(
                state,
                format!("transcription timed out after {}s", timeout_secs),
            )
            .await)
        }
    };
    if transcript.trim().is_empty() {
        return Err(transcription_failed(state, "transcription returned no text".to_string()).await);
    }
    handle_transcript(state, &transcript, issued_by).await
}

async fn transcription_failed(state: &AppState, message: String) -> AppError {
    error!("{}", message);
    state.metrics.record_transcription_error();
    post_notification(
        state,
        Notification::error(
            "Voice Recognition Error",
            "Failed to process voice input. Please try again.",
        ),
    )
    .await;
    AppError::Upstream(message)
}

/// A transcription running in the background. Dropping or cancelling it aborts
/// the work; whatever was already committed stays committed.
pub struct TranscriptionTask {
    handle: JoinHandle<Result<VoiceOutcome, AppError>>,
}

impl TranscriptionTask {
    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub async fn wait(mut self) -> Result<VoiceOutcome, AppError> {
        match (&mut self.handle).await {
            Ok(result) => result,
            Err(err) if err.is_cancelled() => {
                Err(AppError::Upstream("transcription cancelled".to_string()))
            }
            Err(err) => Err(AppError::Internal(anyhow::anyhow!(
                "transcription task failed: {}",
                err
            ))),
        }
    }
}

impl Drop for TranscriptionTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub fn spawn_transcription(
    state: &AppState,
    audio: Vec<u8>,
    content_type: String,
    issued_by: Option<UserProfile>,
) -> TranscriptionTask {
    let state = state.clone();
    let handle = tokio::spawn(async move {
        transcribe_and_route(&state, audio, &content_type, issued_by).await
    });
    TranscriptionTask { handle }
}

pub async fn speak(state: &AppState, request: SpeakRequest) -> Result<SpeechAudio, AppError> {
    let text = request.text.trim();
    if text.is_empty() {
        return Err(AppError::BadRequest("text must not be empty".to_string()));
    }
    state
        .services
        .text_to_speech
        .synthesize(text, request.voice.as_deref())
        .await
        .map_err(|err| {
            warn!("speech synthesis failed: {}", err);
            AppError::Upstream(format!("speech synthesis failed: {}", err))
        })
}
