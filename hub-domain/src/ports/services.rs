use async_trait::async_trait;

use crate::entities::{SpeechAudio, UserProfile};

#[async_trait]
pub trait SpeechToText: Send + Sync {
    async fn transcribe(&self, audio: Vec<u8>, content_type: &str) -> anyhow::Result<String>;
}

#[async_trait]
pub trait TextToSpeech: Send + Sync {
    async fn synthesize(&self, text: &str, voice: Option<&str>) -> anyhow::Result<SpeechAudio>;
}

#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Stores the blob under `path` and returns a publicly resolvable URL.
    async fn upload(&self, path: &str, content_type: &str, bytes: Vec<u8>) -> anyhow::Result<String>;
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn resolve(&self, session_token: Option<&str>) -> anyhow::Result<Option<UserProfile>>;
}

#[async_trait]
pub trait HealthCheckService: Send + Sync {
    async fn check_backend(&self) -> anyhow::Result<bool>;
}
