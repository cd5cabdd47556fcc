// Runtime configuration visible to the application layer

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    #[serde(skip_serializing)]
    pub admin_password: Option<String>,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
    pub default_event_limit: Option<usize>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3234".to_string(),
            admin_password: None,
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 15,
            default_event_limit: None,
        }
    }
}
