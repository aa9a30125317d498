use sms_core::ProviderError;
use thiserror::Error;

use super::options::SourceError;
use super::sdk::SdkError;

/// Errors from the Aliyun provider
///
/// Every variant except [`AliyunError::Rejected`] displays its cause as is.
#[derive(Error, Debug)]
pub enum AliyunError {
    /// Malformed connection string
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Credential, transport or signing failure
    #[error(transparent)]
    Sdk(#[from] SdkError),

    /// Template parameter encoding or response decoding failure
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The vendor answered with a `Code` other than `OK`
    #[error("{message}")]
    Rejected { code: String, message: String },
}

impl From<AliyunError> for ProviderError {
    fn from(err: AliyunError) -> Self {
        ProviderError::provider(err)
    }
}
