use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use serde_json::json;

use hub_domain::ports::{SpeechToText, TextToSpeech};
use hub_domain::SpeechAudio;

use crate::services::backend_client::BackendEndpoint;

const SPEECH_TO_TEXT_PATH: &str = "/functions/v1/speech-to-text";
const TEXT_TO_SPEECH_PATH: &str = "/functions/v1/text-to-speech";
const DEFAULT_VOICE: &str = "alloy";

#[derive(Deserialize)]
struct TranscriptionResponse {
    text: String,
}

#[derive(Deserialize)]
struct SynthesisResponse {
    #[serde(alias = "audioContent")]
    audio_base64: String,
    #[serde(default = "default_format")]
    format: String,
}

fn default_format() -> String {
    "mp3".to_string()
}

/// Speech edge functions of the hosted backend.
pub struct BackendSpeechService {
    endpoint: BackendEndpoint,
}

impl BackendSpeechService {
    pub fn new(endpoint: BackendEndpoint) -> Self {
        Self { endpoint }
    }
}

#[async_trait]
impl SpeechToText for BackendSpeechService {
    async fn transcribe(&self, audio: Vec<u8>, content_type: &str) -> Result<String> {
        let url = self.endpoint.url(SPEECH_TO_TEXT_PATH)?;
        let request = self
            .endpoint
            .client()
            .post(url)
            .header(CONTENT_TYPE, content_type)
            .body(audio);
        let response: TranscriptionResponse = self
            .endpoint
            .authorize(request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response.text.trim().to_string())
    }
}

#[async_trait]
impl TextToSpeech for BackendSpeechService {
    async fn synthesize(&self, text: &str, voice: Option<&str>) -> Result<SpeechAudio> {
        let url = self.endpoint.url(TEXT_TO_SPEECH_PATH)?;
        let request = self.endpoint.client().post(url).json(&json!({
            "text": text,
            "voice": voice.unwrap_or(DEFAULT_VOICE),
        }));
        let response: SynthesisResponse = self
            .endpoint
            .authorize(request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        if response.audio_base64.is_empty() {
            return Err(anyhow!("speech backend returned no audio"));
        }
        Ok(SpeechAudio {
            audio_base64: response.audio_base64,
            format: response.format,
        })
    }
}
