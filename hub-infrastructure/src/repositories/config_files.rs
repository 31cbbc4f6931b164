use std::path::Path;

use anyhow::Context;
use async_trait::async_trait;
use tokio::fs;
use tracing::{info, warn};

use hub_domain::{ClassificationRules, ConfigRepository, SeedData};

use crate::repositories::seed_data::builtin_seed;

/// Reads classification rules (YAML) and seed collections (JSON) from disk.
pub struct ConfigFileRepository;

impl ConfigFileRepository {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConfigFileRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigRepository for ConfigFileRepository {
    async fn load_rules(&self, path: &str) -> anyhow::Result<ClassificationRules> {
        if !Path::new(path).exists() {
            warn!("rules file {} not found, using built-in rules", path);
            return Ok(ClassificationRules::default());
        }
        let content = fs::read_to_string(path).await?;
        let rules: ClassificationRules = serde_yaml::from_str(&content)
            .with_context(|| format!("malformed rules file {}", path))?;
        info!("loaded classification rules from {}", path);
        Ok(rules)
    }

    async fn save_rules(&self, path: &str, rules: &ClassificationRules) -> anyhow::Result<()> {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        let content = serde_yaml::to_string(rules)?;
        fs::write(path, content).await?;
        Ok(())
    }

    async fn load_seed(&self, path: Option<&str>) -> anyhow::Result<SeedData> {
        let Some(path) = path else {
            return builtin_seed();
        };
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("cannot read seed file {}", path))?;
        let seed: SeedData = serde_json::from_str(&content)
            .with_context(|| format!("malformed seed file {}", path))?;
        info!(
            "loaded seed from {}: {} tickets, {} feedback entries",
            path,
            seed.tickets.len(),
            seed.feedbacks.len()
        );
        Ok(seed)
    }
}
