//! SMS provider configuration

use serde::{Deserialize, Serialize};

/// Which registered provider to open, and the connection string to open it with
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SmsConfig {
    /// Registry key of the provider ("aliyun", "mock")
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Provider connection string, e.g.
    /// `https://dysmsapi.aliyuncs.com?version=2017-05-25&api_name=SendSms&...`
    #[serde(default = "default_source")]
    pub source: String,
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            source: default_source(),
        }
    }
}

impl SmsConfig {
    /// Create from environment variables (`SMS_PROVIDER`, `SMS_SOURCE`)
    pub fn from_env() -> Self {
        Self {
            provider: std::env::var("SMS_PROVIDER").unwrap_or_else(|_| default_provider()),
            source: std::env::var("SMS_SOURCE").unwrap_or_else(|_| default_source()),
        }
    }

    /// Create a configuration for the given provider and connection string
    pub fn new(provider: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            source: source.into(),
        }
    }
}

fn default_provider() -> String {
    String::from("mock")
}

fn default_source() -> String {
    String::from("mock://")
}
