//! Shared utilities and common types for the SMS provider workspace
//!
//! This crate provides common functionality used across all modules:
//! - Configuration types (environment, logging, provider selection)
//! - Logging initialization
//! - Utility functions (phone masking)

pub mod config;
pub mod logging;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, Environment, LogFormat, LoggingConfig, SmsConfig};
pub use utils::phone;
