use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use hub_domain::ports::ObjectStorage;

use crate::services::backend_client::BackendEndpoint;

/// Object storage bucket of the hosted backend; uploads are publicly readable.
pub struct BackendObjectStorage {
    endpoint: BackendEndpoint,
    bucket: String,
}

impl BackendObjectStorage {
    pub fn new(endpoint: BackendEndpoint, bucket: impl Into<String>) -> Self {
        Self {
            endpoint,
            bucket: bucket.into(),
        }
    }

    pub fn public_url(&self, path: &str) -> Result<String> {
        self.endpoint.url(&format!(
            "/storage/v1/object/public/{}/{}",
            self.bucket,
            path.trim_start_matches('/')
        ))
    }
}

#[async_trait]
impl ObjectStorage for BackendObjectStorage {
    async fn upload(&self, path: &str, content_type: &str, bytes: Vec<u8>) -> Result<String> {
        let url = self.endpoint.url(&format!(
            "/storage/v1/object/{}/{}",
            self.bucket,
            path.trim_start_matches('/')
        ))?;
        let request = self
            .endpoint
            .client()
            .post(url)
            .header(CONTENT_TYPE, content_type)
            .header("x-upsert", "true")
            .body(bytes);
        self.endpoint
            .authorize(request)
            .send()
            .await?
            .error_for_status()?;
        self.public_url(path)
    }
}

#[cfg(test)]
mod tests {
    use hub_domain::RuntimeConfig;

    use super::*;

    #[test]
    fn public_url_points_into_the_bucket() {
        let config = RuntimeConfig {
            backend_url: Some("https://hub.test".to_string()),
            ..RuntimeConfig::default()
        };
        let storage = BackendObjectStorage::new(
            BackendEndpoint::from_config(&config).expect("endpoint"),
            "ticket-images",
        );
        assert_eq!(
            storage.public_url("tickets/2035/a.png").expect("url"),
            "https://hub.test/storage/v1/object/public/ticket-images/tickets/2035/a.png"
        );
    }
}
