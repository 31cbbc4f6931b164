use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use hub_application::{AppServices, AppState};
use hub_domain::ConfigRepository;
use hub_infrastructure::{
    AppConfig, BackendEndpoint, BackendIdentityProvider, BackendObjectStorage,
    BackendSpeechService, ConfigFileRepository, DefaultHealthService,
};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new() -> Result<Self> {
        Self::from_config(AppConfig::load().await?).await
    }

    pub async fn from_config(config: AppConfig) -> Result<Self> {
        let runtime_config = config.to_runtime_config();
        let endpoint = BackendEndpoint::from_config(&runtime_config)?;
        if !endpoint.is_configured() {
            info!("backend_url not set, speech/storage calls will fail and sessions are anonymous");
        }

        let config_repo = Arc::new(ConfigFileRepository::new());
        let rules = config_repo.load_rules(&runtime_config.rules_path).await?;
        let seed = config_repo
            .load_seed(runtime_config.seed_path.as_deref())
            .await?;
        let speech = Arc::new(BackendSpeechService::new(endpoint.clone()));

        let services = AppServices {
            config_repo,
            speech_to_text: speech.clone(),
            text_to_speech: speech,
            object_storage: Arc::new(BackendObjectStorage::new(
                endpoint.clone(),
                runtime_config.storage_bucket.clone(),
            )),
            identity: Arc::new(BackendIdentityProvider::new(endpoint.clone())),
            health_service: Arc::new(DefaultHealthService::new(endpoint)),
        };
        info!(
            "seeded {} tickets, {} feedback entries, {} halls",
            seed.tickets.len(),
            seed.feedbacks.len(),
            seed.halls.len()
        );

        Ok(Self {
            state: AppState::new(runtime_config, services, rules, seed),
        })
    }
}
