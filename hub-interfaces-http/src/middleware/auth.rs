use std::io::Read;

use anyhow::Result;
use axum::http::HeaderMap;
use flate2::read::GzDecoder;

use hub_application::queries::identity_queries;
use hub_application::AppState;
use hub_domain::{RuntimeConfig, UserProfile};

pub const SESSION_HEADER: &str = "X-Session-Token";

pub fn authorize(config: &RuntimeConfig, headers: &HeaderMap) -> bool {
    if let Some(api_token) = &config.api_token {
        return extract_bearer(headers)
            .map(|v| v == *api_token)
            .unwrap_or(false);
    }
    true
}

/// The signed-in resident behind the request, if any.
pub async fn resident(state: &AppState, headers: &HeaderMap) -> Option<UserProfile> {
    let token = headers
        .get(SESSION_HEADER)
        .and_then(|value| value.to_str().ok());
    identity_queries::resolve_resident(state, token).await
}

pub fn content_type(headers: &HeaderMap, fallback: &str) -> String {
    headers
        .get("Content-Type")
        .and_then(|value| value.to_str().ok())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// Raw request bytes, inflated when the client sent `Content-Encoding: gzip`.
pub fn maybe_gunzip(headers: &HeaderMap, body: &[u8]) -> Result<Vec<u8>> {
    if let Some(encoding) = headers.get("Content-Encoding") {
        if encoding.to_str().unwrap_or("") == "gzip" {
            let mut decoder = GzDecoder::new(body);
            let mut out = Vec::new();
            decoder.read_to_end(&mut out)?;
            return Ok(out);
        }
    }
    Ok(body.to_vec())
}

fn extract_bearer(headers: &HeaderMap) -> Option<String> {
    let value = headers.get("Authorization")?.to_str().ok()?.trim();
    let prefix = "Bearer ";
    if !value.starts_with(prefix) {
        return None;
    }
    let token = value[prefix.len()..].trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use axum::http::HeaderValue;
    use flate2::write::GzEncoder;
    use flate2::Compression;

    use super::*;

    #[test]
    fn bearer_token_must_match_when_configured() {
        let config = RuntimeConfig {
            api_token: Some("secret".to_string()),
            ..RuntimeConfig::default()
        };
        let mut headers = HeaderMap::new();
        assert!(!authorize(&config, &headers));
        headers.insert("Authorization", HeaderValue::from_static("Bearer secret"));
        assert!(authorize(&config, &headers));
        assert!(authorize(&RuntimeConfig::default(), &HeaderMap::new()));
    }

    #[test]
    fn gzip_bodies_are_inflated() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"audio-bytes").expect("write");
        let compressed = encoder.finish().expect("finish");
        let mut headers = HeaderMap::new();
        headers.insert("Content-Encoding", HeaderValue::from_static("gzip"));
        assert_eq!(
            maybe_gunzip(&headers, &compressed).expect("inflate"),
            b"audio-bytes".to_vec()
        );
        assert_eq!(
            maybe_gunzip(&HeaderMap::new(), b"plain").expect("plain"),
            b"plain".to_vec()
        );
    }
}
