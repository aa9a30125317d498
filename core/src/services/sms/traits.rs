//! Trait for SMS provider integration

use async_trait::async_trait;

use crate::errors::ProviderError;

/// A backend that delivers one-time verification codes by SMS
#[async_trait]
pub trait SmsProvider: Send + Sync {
    /// Send `code` to `phone_number`
    ///
    /// Returns `Ok(())` once the vendor has accepted the message. Any
    /// configuration, transport or vendor error is returned unchanged.
    async fn send_code(&self, phone_number: &str, code: &str) -> Result<(), ProviderError>;

    /// Registry name of the provider (e.g. "aliyun", "mock")
    fn provider_name(&self) -> &str;
}
