//! Aliyun SMS Provider
//!
//! Sends verification codes through Alibaba Cloud's `dysmsapi` RPC endpoint.
//!
//! - `options` - connection string parsing
//! - `sdk` - common request model, request signing and transport
//! - `client` - the `send_code` adapter on top of the SDK

pub mod client;
mod error;
pub mod options;
pub mod sdk;

pub use client::AliyunSmsClient;
pub use error::AliyunError;
pub use options::{Options, SourceError};

use sms_core::{ProviderError, SmsProvider};

/// Registry opener: parse `source` and build a client from it
pub fn open(source: &str) -> Result<Box<dyn SmsProvider>, ProviderError> {
    let options = Options::parse(source).map_err(AliyunError::from)?;
    Ok(Box::new(AliyunSmsClient::new(options)?))
}
