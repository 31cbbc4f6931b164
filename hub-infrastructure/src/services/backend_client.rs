use std::time::Duration;

use anyhow::{anyhow, Result};
use reqwest::{Client, RequestBuilder};

use hub_domain::RuntimeConfig;

use crate::utils::join_url;

/// Connection details for the hosted backend (auth, storage, edge functions).
#[derive(Debug, Clone)]
pub struct BackendEndpoint {
    base_url: Option<String>,
    api_key: Option<String>,
    client: Client,
}

impl BackendEndpoint {
    pub fn from_config(config: &RuntimeConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds.max(3)))
            .build()?;
        Ok(Self {
            base_url: config.backend_url.clone(),
            api_key: config.backend_api_key.clone(),
            client,
        })
    }

    pub fn is_configured(&self) -> bool {
        self.base_url.is_some()
    }

    pub fn url(&self, path: &str) -> Result<String> {
        let base = self
            .base_url
            .as_deref()
            .ok_or_else(|| anyhow!("backend_url is not configured"))?;
        Ok(join_url(base, path))
    }

    /// Attaches the project key both as `apikey` and as the default bearer token.
    pub fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => request.header("apikey", key).bearer_auth(key),
            None => request,
        }
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_backend_has_no_urls() {
        let endpoint = BackendEndpoint::from_config(&RuntimeConfig::default()).expect("endpoint");
        assert!(!endpoint.is_configured());
        assert!(endpoint.url("/auth/v1/user").is_err());
    }
}
