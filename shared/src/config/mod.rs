//! Configuration module with sub-modules
//!
//! - `environment` - Environment detection and logging configuration
//! - `sms` - SMS provider selection and connection string

pub mod environment;
pub mod sms;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use sms::SmsConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// SMS provider configuration
    #[serde(default)]
    pub sms: SmsConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            logging: LoggingConfig::for_environment(env),
            sms: SmsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment
    ///
    /// A `.env` file in the working directory is loaded first if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let environment = Environment::from_env();
        Self {
            environment,
            logging: LoggingConfig::for_environment(environment),
            sms: SmsConfig::from_env(),
        }
    }
}
