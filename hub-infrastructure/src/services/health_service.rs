use async_trait::async_trait;

use hub_domain::ports::HealthCheckService;

use crate::services::backend_client::BackendEndpoint;

const HEALTH_PATH: &str = "/auth/v1/health";

pub struct DefaultHealthService {
    endpoint: BackendEndpoint,
}

impl DefaultHealthService {
    pub fn new(endpoint: BackendEndpoint) -> Self {
        Self { endpoint }
    }
}

#[async_trait]
impl HealthCheckService for DefaultHealthService {
    /// Always healthy when no backend is configured; the in-memory collections
    /// serve every read.
    async fn check_backend(&self) -> anyhow::Result<bool> {
        if !self.endpoint.is_configured() {
            return Ok(true);
        }
        let request = self.endpoint.client().get(self.endpoint.url(HEALTH_PATH)?);
        let response = self.endpoint.authorize(request).send().await?;
        if !response.status().is_success() {
            anyhow::bail!("backend responded {}", response.status());
        }
        Ok(true)
    }
}
