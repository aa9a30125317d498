//! # Infrastructure Layer
//!
//! Concrete SMS providers behind the [`sms_core::SmsProvider`] contract.
//!
//! ## Providers
//!
//! - **aliyun**: Alibaba Cloud SMS (`dysmsapi`), opened from a connection string
//!   such as `https://dysmsapi.aliyuncs.com?version=2017-05-25&api_name=SendSms&access_key=...&access_secret=...&sign_name=...&template_code=...`
//! - **mock**: logs codes instead of sending them, for development and tests
//!
//! ## Features
//!
//! - `aliyun-sms`: Enable the Aliyun SMS provider (default)

pub use sms_core::errors::*;

/// SMS provider module - external SMS vendors
pub mod sms;

use sms_core::{Opener, ProviderRegistry};

/// Registry key of the Aliyun provider
#[cfg(feature = "aliyun-sms")]
pub const ALIYUN: &str = "aliyun";

/// Registry key of the mock provider
pub const MOCK: &str = "mock";

fn providers() -> Vec<(&'static str, Opener)> {
    let mut providers: Vec<(&'static str, Opener)> = Vec::new();
    providers.push((MOCK, sms::mock_sms::open));
    #[cfg(feature = "aliyun-sms")]
    providers.push((ALIYUN, sms::aliyun::open));
    providers
}

/// Register every provider of this crate into `registry`
pub fn register_providers(registry: &mut ProviderRegistry) -> Result<(), ProviderError> {
    for (name, opener) in providers() {
        registry.register(name, opener)?;
    }
    Ok(())
}

/// Register every provider of this crate into the process-wide registry
///
/// Safe to call more than once: names that are already registered are left as
/// they are.
pub fn register_default_providers() -> Result<(), ProviderError> {
    for (name, opener) in providers() {
        match sms_core::services::sms::register(name, opener) {
            Ok(()) | Err(ProviderError::DuplicateProvider { .. }) => {}
            Err(e) => return Err(e),
        }
    }
    tracing::debug!(
        providers = ?sms_core::services::sms::registered_providers(),
        "SMS providers registered"
    );
    Ok(())
}
