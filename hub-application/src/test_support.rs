// In-process stand-ins for the external collaborators

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{NaiveDate, TimeZone, Utc};

use hub_domain::ports::{
    ConfigRepository, HealthCheckService, IdentityProvider, ObjectStorage, SpeechToText,
    TextToSpeech,
};
use hub_domain::{
    ClassificationRules, EventId, Feedback, FeedbackCategory, FeedbackSource, Hall, Priority,
    Rating, Reminder, ReminderKind, ReminderPriority, RuntimeConfig, SeedData, SpeechAudio,
    Ticket, TicketCategory, TicketId, TicketStatus, UserProfile,
};

use crate::{AppServices, AppState};

pub struct StubSpeech {
    result: Result<String, String>,
    delay: Duration,
}

impl StubSpeech {
    pub fn ok(transcript: &str) -> Self {
        Self {
            result: Ok(transcript.to_string()),
            delay: Duration::ZERO,
        }
    }

    pub fn slow(transcript: &str, delay: Duration) -> Self {
        Self {
            result: Ok(transcript.to_string()),
            delay,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(message.to_string()),
            delay: Duration::ZERO,
        }
    }
}

#[async_trait]
impl SpeechToText for StubSpeech {
    async fn transcribe(&self, _audio: Vec<u8>, _content_type: &str) -> anyhow::Result<String> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.result.clone().map_err(|message| anyhow::anyhow!(message))
    }
}

#[async_trait]
impl TextToSpeech for StubSpeech {
    async fn synthesize(&self, text: &str, _voice: Option<&str>) -> anyhow::Result<SpeechAudio> {
        Ok(SpeechAudio {
            audio_base64: text.to_string(),
            format: "mp3".to_string(),
        })
    }
}

pub struct StubStorage;

#[async_trait]
impl ObjectStorage for StubStorage {
    async fn upload(&self, path: &str, _content_type: &str, _bytes: Vec<u8>) -> anyhow::Result<String> {
        Ok(format!("https://storage.test/{}", path))
    }
}

pub struct StubIdentity;

#[async_trait]
impl IdentityProvider for StubIdentity {
    async fn resolve(&self, session_token: Option<&str>) -> anyhow::Result<Option<UserProfile>> {
        Ok(session_token.map(|token| UserProfile {
            display_name: token.to_string(),
            role: Default::default(),
            apartment_number: None,
        }))
    }
}

pub struct StubConfigRepository;

#[async_trait]
impl ConfigRepository for StubConfigRepository {
    async fn load_rules(&self, _path: &str) -> anyhow::Result<ClassificationRules> {
        Ok(ClassificationRules::default())
    }

    async fn save_rules(&self, _path: &str, _rules: &ClassificationRules) -> anyhow::Result<()> {
        Ok(())
    }

    async fn load_seed(&self, _path: Option<&str>) -> anyhow::Result<SeedData> {
        Ok(seed())
    }
}

pub struct StubHealth;

#[async_trait]
impl HealthCheckService for StubHealth {
    async fn check_backend(&self) -> anyhow::Result<bool> {
        Ok(true)
    }
}

fn ticket(id: &str, status: TicketStatus, day: u32, assigned_to: Option<&str>) -> Ticket {
    Ticket {
        id: TicketId::from(id),
        title: format!("Seeded ticket {}", id),
        description: "Seeded for tests".to_string(),
        priority: Priority::High,
        status,
        category: TicketCategory::Maintenance,
        location: "Main Elevator".to_string(),
        created_at: Utc
            .with_ymd_and_hms(2024, 1, day, 9, 0, 0)
            .single()
            .expect("seed timestamp"),
        assigned_to: assigned_to.map(str::to_string),
        image_url: None,
        reported_by: None,
    }
}

fn feedback(id: &str, event_id: &str, title: &str, rating: i64, day: u32) -> Feedback {
    Feedback {
        id: id.to_string(),
        event_id: EventId::from(event_id),
        event_title: title.to_string(),
        rating: Rating::new(rating).expect("seed rating"),
        body: "Seeded feedback".to_string(),
        source: FeedbackSource::Text,
        category: FeedbackCategory::Positive,
        submitted_at: Utc
            .with_ymd_and_hms(2024, 1, day, 18, 0, 0)
            .single()
            .expect("seed timestamp"),
    }
}

pub fn seed() -> SeedData {
    let reminder_time = NaiveDate::from_ymd_opt(2024, 1, 25)
        .and_then(|date| date.and_hms_opt(9, 0, 0))
        .expect("reminder time");
    SeedData {
        tickets: vec![
            ticket("2035", TicketStatus::InProgress, 15, Some("Mike Johnson")),
            ticket("2041", TicketStatus::Open, 11, None),
        ],
        feedbacks: vec![
            feedback("fb1", "event-1", "Rooftop Sunset Yoga", 5, 10),
            feedback("fb2", "event-2", "Community Game Night", 4, 12),
        ],
        halls: vec![Hall {
            id: "1".to_string(),
            name: "Community Hall A".to_string(),
            capacity: 100,
            location: "Block A, Ground Floor".to_string(),
            is_available: true,
            amenities: vec!["Projector".to_string()],
            next_available: None,
        }],
        reminders: vec![
            Reminder {
                id: "1".to_string(),
                title: "Water Supply Maintenance".to_string(),
                message: "Water supply will be interrupted".to_string(),
                kind: ReminderKind::Maintenance,
                date_time: reminder_time,
                is_read: false,
                priority: ReminderPriority::High,
            },
            Reminder {
                id: "2".to_string(),
                title: "Community Meeting".to_string(),
                message: "Monthly meeting in the hall".to_string(),
                kind: ReminderKind::Event,
                date_time: reminder_time,
                is_read: false,
                priority: ReminderPriority::Medium,
            },
        ],
        cctv_requests: Vec::new(),
    }
}

fn services(speech: Arc<StubSpeech>) -> AppServices {
    AppServices {
        config_repo: Arc::new(StubConfigRepository),
        speech_to_text: speech.clone(),
        text_to_speech: speech,
        object_storage: Arc::new(StubStorage),
        identity: Arc::new(StubIdentity),
        health_service: Arc::new(StubHealth),
    }
}

pub fn test_state_with(config: RuntimeConfig, speech: Arc<StubSpeech>) -> AppState {
    AppState::new(config, services(speech), ClassificationRules::default(), seed())
}

pub fn test_state() -> AppState {
    test_state_with_config(RuntimeConfig::default())
}

pub fn test_state_with_config(config: RuntimeConfig) -> AppState {
    test_state_with(config, Arc::new(StubSpeech::ok("what's the status of ticket 2035")))
}

pub fn test_state_with_speech(speech: Arc<StubSpeech>) -> AppState {
    test_state_with(RuntimeConfig::default(), speech)
}
