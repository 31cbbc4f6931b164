use std::collections::VecDeque;
use std::sync::Arc;

use hub_domain::ports::{
    ConfigRepository, HealthCheckService, IdentityProvider, ObjectStorage, SpeechToText,
    TextToSpeech,
};
use hub_domain::{
    CctvRequest, ClassificationRules, EventRecommendation, Feedback, Hall, HallBooking,
    Notification, Reminder, RuntimeConfig, SeedData, Ticket,
};
use tokio::sync::RwLock;

use crate::{Metrics, VoiceCommandHub};

/// External collaborators wired in by the bootstrap crate (or by test stubs).
#[derive(Clone)]
pub struct AppServices {
    pub config_repo: Arc<dyn ConfigRepository>,
    pub speech_to_text: Arc<dyn SpeechToText>,
    pub text_to_speech: Arc<dyn TextToSpeech>,
    pub object_storage: Arc<dyn ObjectStorage>,
    pub identity: Arc<dyn IdentityProvider>,
    pub health_service: Arc<dyn HealthCheckService>,
}

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub services: AppServices,
    pub rules: Arc<RwLock<ClassificationRules>>,
    pub tickets: Arc<RwLock<Vec<Ticket>>>,
    pub feedbacks: Arc<RwLock<Vec<Feedback>>>,
    pub selected_events: Arc<RwLock<Vec<EventRecommendation>>>,
    pub halls: Arc<RwLock<Vec<Hall>>>,
    pub hall_bookings: Arc<RwLock<Vec<HallBooking>>>,
    pub reminders: Arc<RwLock<Vec<Reminder>>>,
    pub cctv_requests: Arc<RwLock<Vec<CctvRequest>>>,
    /// Newest first, bounded by `config.notification_capacity`.
    pub notifications: Arc<RwLock<VecDeque<Notification>>>,
    pub voice_hub: Arc<VoiceCommandHub>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(
        config: RuntimeConfig,
        services: AppServices,
        rules: ClassificationRules,
        seed: SeedData,
    ) -> Self {
        Self {
            config,
            services,
            rules: Arc::new(RwLock::new(rules)),
            tickets: Arc::new(RwLock::new(seed.tickets)),
            feedbacks: Arc::new(RwLock::new(seed.feedbacks)),
            selected_events: Arc::new(RwLock::new(Vec::new())),
            halls: Arc::new(RwLock::new(seed.halls)),
            hall_bookings: Arc::new(RwLock::new(Vec::new())),
            reminders: Arc::new(RwLock::new(seed.reminders)),
            cctv_requests: Arc::new(RwLock::new(seed.cctv_requests)),
            notifications: Arc::new(RwLock::new(VecDeque::new())),
            voice_hub: Arc::new(VoiceCommandHub::default()),
            metrics: Arc::new(Metrics::default()),
        }
    }
}
