//! Error types for provider registration, opening and sending.

use thiserror::Error;

/// Boxed error raised by a concrete provider implementation
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors surfaced through the [`SmsProvider`](crate::SmsProvider) contract
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("sms: unknown provider {name:?}")]
    UnknownProvider { name: String },

    #[error("sms: provider {name:?} already registered")]
    DuplicateProvider { name: String },

    #[error("sms: provider name must not be empty")]
    EmptyProviderName,

    /// Error reported by a provider (configuration, transport or vendor
    /// rejection), passed through unchanged.
    #[error(transparent)]
    Provider(BoxError),
}

impl ProviderError {
    /// Wrap a provider-specific error
    pub fn provider<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ProviderError::Provider(Box::new(err))
    }

    /// Borrow the provider-specific error as `E`, if that is what this wraps
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: std::error::Error + 'static,
    {
        match self {
            ProviderError::Provider(inner) => inner.downcast_ref::<E>(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Error, Debug)]
    #[error("isv.BUSINESS_LIMIT_CONTROL")]
    struct VendorError;

    #[test]
    fn test_provider_error_is_transparent() {
        let err = ProviderError::provider(VendorError);
        assert_eq!(err.to_string(), "isv.BUSINESS_LIMIT_CONTROL");
        assert!(err.downcast_ref::<VendorError>().is_some());
    }

    #[test]
    fn test_registry_errors_do_not_downcast() {
        let err = ProviderError::UnknownProvider { name: "tencent".into() };
        assert_eq!(err.to_string(), "sms: unknown provider \"tencent\"");
        assert!(err.downcast_ref::<VendorError>().is_none());
    }
}
