use std::env;
use std::net::SocketAddr;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use hub_domain::RuntimeConfig;

use crate::config::validation::{validate_base_url, validate_facility};

pub const CONFIG_PATH_ENV: &str = "RESIDENT_HUB_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "./config.toml";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub api_token: Option<String>,
    pub backend_url: Option<String>,
    pub backend_api_key: Option<String>,
    pub storage_bucket: String,
    pub rules_path: String,
    pub seed_path: Option<String>,
    pub facilities: Vec<String>,
    pub speech_timeout_seconds: u64,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
    pub notification_capacity: usize,
    pub log_dir: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let runtime = RuntimeConfig::default();
        Self {
            bind_addr: runtime.bind_addr,
            api_token: None,
            backend_url: None,
            backend_api_key: None,
            storage_bucket: runtime.storage_bucket,
            rules_path: runtime.rules_path,
            seed_path: None,
            facilities: runtime.facilities,
            speech_timeout_seconds: runtime.speech_timeout_seconds,
            max_body_bytes: runtime.max_body_bytes,
            request_timeout_seconds: runtime.request_timeout_seconds,
            notification_capacity: runtime.notification_capacity,
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// `RESIDENT_HUB_CONFIG`, or `./config.toml` when unset.
    pub fn path() -> String {
        env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
    }

    pub async fn load() -> Result<Self> {
        let path = Self::path();
        let file_path = Path::new(&path);
        let mut config = if file_path.exists() {
            let content = fs::read_to_string(file_path).await?;
            Self::from_toml(&content)?
        } else {
            warn!("{} not found, using defaults", path);
            AppConfig::default()
        };
        config.apply_env_overrides();
        config.resolve_paths(file_path.parent());
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|err| anyhow!("invalid config: {}", err))
    }

    pub fn normalize(&mut self) {
        self.api_token = blank_to_none(self.api_token.take());
        self.backend_url = blank_to_none(self.backend_url.take())
            .map(|url| url.trim_end_matches('/').to_string());
        self.backend_api_key = blank_to_none(self.backend_api_key.take());
        self.seed_path = blank_to_none(self.seed_path.take());
        self.log_dir = blank_to_none(self.log_dir.take());
        self.storage_bucket = self.storage_bucket.trim().to_string();
        self.facilities = normalize_facilities(std::mem::take(&mut self.facilities));
    }

    fn resolve_paths(&mut self, base_dir: Option<&Path>) {
        let Some(base) = base_dir else {
            return;
        };
        self.rules_path = resolve_path(base, &self.rules_path);
        self.seed_path = self.seed_path.as_deref().map(|path| resolve_path(base, path));
        self.log_dir = self.log_dir.as_deref().map(|path| resolve_path(base, path));
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        if let Some(url) = &self.backend_url {
            validate_base_url("backend_url", url)?;
        }
        if self.storage_bucket.is_empty() {
            return Err(anyhow!("storage_bucket must not be empty"));
        }
        if self.rules_path.trim().is_empty() {
            return Err(anyhow!("rules_path must not be empty"));
        }
        for facility in &self.facilities {
            validate_facility(facility)?;
        }
        if self.max_body_bytes == 0 {
            return Err(anyhow!("max_body_bytes must be greater than 0"));
        }
        if self.request_timeout_seconds == 0 || self.speech_timeout_seconds == 0 {
            return Err(anyhow!("timeouts must be greater than 0"));
        }
        if self.notification_capacity == 0 {
            return Err(anyhow!("notification_capacity must be greater than 0"));
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            api_token: self.api_token.clone(),
            backend_url: self.backend_url.clone(),
            backend_api_key: self.backend_api_key.clone(),
            storage_bucket: self.storage_bucket.clone(),
            rules_path: self.rules_path.clone(),
            seed_path: self.seed_path.clone(),
            facilities: self.facilities.clone(),
            speech_timeout_seconds: self.speech_timeout_seconds,
            max_body_bytes: self.max_body_bytes,
            request_timeout_seconds: self.request_timeout_seconds,
            notification_capacity: self.notification_capacity,
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("HUB_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Ok(value) = env::var("HUB_API_TOKEN") {
            self.api_token = Some(value);
        }
        if let Ok(value) = env::var("HUB_BACKEND_URL") {
            self.backend_url = Some(value);
        }
        if let Ok(value) = env::var("HUB_BACKEND_API_KEY") {
            self.backend_api_key = Some(value);
        }
        if let Ok(value) = env::var("HUB_STORAGE_BUCKET") {
            self.storage_bucket = value;
        }
        if let Ok(value) = env::var("HUB_RULES_PATH") {
            self.rules_path = value;
        }
        if let Ok(value) = env::var("HUB_SEED_PATH") {
            self.seed_path = Some(value);
        }
        if let Ok(value) = env::var("HUB_FACILITIES") {
            self.facilities = value.split(',').map(ToString::to_string).collect();
        }
        if let Ok(value) = env::var("HUB_SPEECH_TIMEOUT_SECONDS") {
            self.speech_timeout_seconds = value.parse().unwrap_or(self.speech_timeout_seconds);
        }
        if let Ok(value) = env::var("HUB_MAX_BODY_BYTES") {
            self.max_body_bytes = value.parse().unwrap_or(self.max_body_bytes);
        }
        if let Ok(value) = env::var("HUB_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
        if let Ok(value) = env::var("HUB_NOTIFICATION_CAPACITY") {
            self.notification_capacity = value.parse().unwrap_or(self.notification_capacity);
        }
        if let Ok(value) = env::var("HUB_LOG_DIR") {
            self.log_dir = Some(value);
        }
    }
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}

fn resolve_path(base: &Path, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return trimmed.to_string();
    }
    let path = Path::new(trimmed);
    if path.is_absolute() {
        trimmed.to_string()
    } else {
        base.join(path).to_string_lossy().to_string()
    }
}

fn normalize_facilities(values: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = values
        .into_iter()
        .map(|item| item.trim().to_lowercase())
        .filter(|item| !item.is_empty())
        .collect();
    out.sort();
    out.dedup();
    out
}
