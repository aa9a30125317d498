//! SMS Provider Module
//!
//! Provider implementations for sending verification codes.
//!
//! ## Features
//!
//! - **Aliyun Support**: Alibaba Cloud SMS via its signed RPC API
//! - **Mock Implementation**: Console output for development
//! - **Security**: Phone number masking in logs

// Aliyun SMS provider (feature-gated)
#[cfg(feature = "aliyun-sms")]
pub mod aliyun;

pub mod mock_sms;

// Re-export commonly used types
pub use mock_sms::MockSmsProvider;
pub use sms_shared::phone::{mask_phone_number, mask_phone_numbers};

#[cfg(feature = "aliyun-sms")]
pub use aliyun::{AliyunError, AliyunSmsClient, Options, SourceError};

#[cfg(test)]
mod tests;
