//! # SMS Core
//!
//! Core contract for verification-code SMS providers.
//! This crate contains the provider trait, the string-keyed provider registry,
//! and the error types shared by every provider implementation.

pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use errors::*;
pub use services::sms::{Opener, ProviderRegistry, SmsProvider};
