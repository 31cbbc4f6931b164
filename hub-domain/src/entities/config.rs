// Runtime configuration handed to the application layer

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
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
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3240".to_string(),
            api_token: None,
            backend_url: None,
            backend_api_key: None,
            storage_bucket: "ticket-images".to_string(),
            rules_path: "./classification_rules.yaml".to_string(),
            seed_path: None,
            facilities: vec![
                "terrace".to_string(),
                "lounge".to_string(),
                "garden".to_string(),
            ],
            speech_timeout_seconds: 20,
            max_body_bytes: 10 * 1024 * 1024,
            request_timeout_seconds: 30,
            notification_capacity: 100,
        }
    }
}
