use serde::{Deserialize, Serialize};

/// Configuration for the accounts module
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccountsConfig {
    #[serde(default = "default_identity_base_url")]
    pub identity_base_url: String,
    /// Public (anon) API key sent with every identity-provider request.
    #[serde(default)]
    pub anon_key: String,
    #[serde(default = "default_request_timeout_sec")]
    pub request_timeout_sec: u64,
}

impl Default for AccountsConfig {
    fn default() -> Self {
        Self {
            identity_base_url: default_identity_base_url(),
            anon_key: String::new(),
            request_timeout_sec: default_request_timeout_sec(),
        }
    }
}

fn default_identity_base_url() -> String {
    "http://identity.local".to_string()
}

fn default_request_timeout_sec() -> u64 {
    10
}
