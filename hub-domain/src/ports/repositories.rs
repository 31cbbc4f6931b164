use async_trait::async_trait;

use crate::entities::SeedData;
use crate::services::ClassificationRules;

/// File-backed configuration data read at startup.
#[async_trait]
pub trait ConfigRepository: Send + Sync {
    /// Missing file yields the built-in rule tables.
    async fn load_rules(&self, path: &str) -> anyhow::Result<ClassificationRules>;
    async fn save_rules(&self, path: &str, rules: &ClassificationRules) -> anyhow::Result<()>;

    /// `None` yields the built-in demo collections.
    async fn load_seed(&self, path: Option<&str>) -> anyhow::Result<SeedData>;
}
