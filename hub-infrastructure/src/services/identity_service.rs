use anyhow::Result;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use hub_domain::ports::IdentityProvider;
use hub_domain::{UserProfile, UserRole};

use crate::services::backend_client::BackendEndpoint;

const USER_PATH: &str = "/auth/v1/user";

#[derive(Debug, Default, Deserialize)]
struct UserMetadata {
    #[serde(default, alias = "full_name")]
    display_name: Option<String>,
    #[serde(default)]
    apartment_number: Option<String>,
    #[serde(default)]
    role: Option<UserRole>,
}

#[derive(Debug, Deserialize)]
struct AuthUser {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    user_metadata: UserMetadata,
}

impl AuthUser {
    fn into_profile(self) -> UserProfile {
        let display_name = self
            .user_metadata
            .display_name
            .filter(|name| !name.trim().is_empty())
            .or(self.email)
            .unwrap_or_else(|| "Resident".to_string());
        UserProfile {
            display_name,
            role: self.user_metadata.role.unwrap_or_default(),
            apartment_number: self.user_metadata.apartment_number,
        }
    }
}

/// Resolves session tokens against the hosted auth service. Without a
/// configured backend every caller is anonymous.
pub struct BackendIdentityProvider {
    endpoint: BackendEndpoint,
}

impl BackendIdentityProvider {
    pub fn new(endpoint: BackendEndpoint) -> Self {
        Self { endpoint }
    }
}

#[async_trait]
impl IdentityProvider for BackendIdentityProvider {
    async fn resolve(&self, session_token: Option<&str>) -> Result<Option<UserProfile>> {
        let Some(token) = session_token else {
            return Ok(None);
        };
        if !self.endpoint.is_configured() {
            debug!("backend not configured, session treated as anonymous");
            return Ok(None);
        }
        let mut request = self
            .endpoint
            .client()
            .get(self.endpoint.url(USER_PATH)?)
            .bearer_auth(token);
        if let Some(key) = self.endpoint.api_key() {
            request = request.header("apikey", key);
        }
        let response = request.send().await?;
        if response.status() == StatusCode::UNAUTHORIZED {
            return Ok(None);
        }
        let user: AuthUser = response.error_for_status()?.json().await?;
        Ok(Some(user.into_profile()))
    }
}

#[cfg(test)]
mod tests {
    use hub_domain::RuntimeConfig;

    use super::*;

    #[tokio::test]
    async fn unconfigured_backend_is_anonymous() {
        let provider = BackendIdentityProvider::new(
            BackendEndpoint::from_config(&RuntimeConfig::default()).expect("endpoint"),
        );
        assert_eq!(provider.resolve(Some("token")).await.expect("resolve"), None);
    }

    #[test]
    fn profile_falls_back_to_email() {
        let user: AuthUser = serde_json::from_str(
            r#"{"email": "priya@example.com", "user_metadata": {"apartment_number": "5B"}}"#,
        )
        .expect("user");
        let profile = user.into_profile();
        assert_eq!(profile.display_name, "priya@example.com");
        assert_eq!(profile.home_location().as_deref(), Some("Apartment 5B"));
    }
}
