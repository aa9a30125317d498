//! Mock SMS Provider Implementation
//!
//! A mock implementation of the SMS provider for development and testing.
//! This implementation logs verification codes instead of sending them.

use async_trait::async_trait;
use sms_core::{ProviderError, SmsProvider};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::{info, warn};
use url::Url;

use super::mask_phone_numbers;

/// Error returned when failure simulation is enabled
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("simulated SMS sending failure")]
pub struct SimulatedFailure;

/// Mock SMS provider for development and testing
///
/// This implementation:
/// - Logs codes to console
/// - Tracks sent count and the last `(phone, code)` for testing
/// - Can simulate vendor failures
#[derive(Clone)]
pub struct MockSmsProvider {
    /// Counter for tracking number of codes sent
    message_count: Arc<AtomicU64>,
    /// Last delivered `(phone, code)`
    last_sent: Arc<Mutex<Option<(String, String)>>>,
    /// Whether to simulate failures (for testing)
    simulate_failure: bool,
    /// Whether to print codes to console
    console_output: bool,
}

impl MockSmsProvider {
    /// Create a new mock SMS provider
    pub fn new() -> Self {
        Self::with_options(true, false)
    }

    /// Create a mock provider with configurable options
    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            last_sent: Arc::new(Mutex::new(None)),
            simulate_failure,
            console_output,
        }
    }

    /// Get the total number of codes sent
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Last delivered `(phone, code)`, if any
    pub fn last_sent(&self) -> Option<(String, String)> {
        self.last_sent
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Reset the message counter
    pub fn reset_counter(&self) {
        self.message_count.store(0, Ordering::SeqCst);
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&mut self, simulate: bool) {
        self.simulate_failure = simulate;
    }
}

impl Default for MockSmsProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry opener
///
/// Accepts `mock://` optionally followed by `?console=true` and/or
/// `?simulate_failure=true`. Any other source opens a quiet mock.
pub fn open(source: &str) -> Result<Box<dyn SmsProvider>, ProviderError> {
    let mut console_output = false;
    let mut simulate_failure = false;
    if let Ok(url) = Url::parse(source) {
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "console" => console_output = value == "true",
                "simulate_failure" => simulate_failure = value == "true",
                _ => {}
            }
        }
    }
    Ok(Box::new(MockSmsProvider::with_options(
        console_output,
        simulate_failure,
    )))
}

#[async_trait]
impl SmsProvider for MockSmsProvider {
    async fn send_code(&self, phone_number: &str, code: &str) -> Result<(), ProviderError> {
        let masked_phone = mask_phone_numbers(phone_number);

        // Simulate failure if configured
        if self.simulate_failure {
            warn!(
                "Mock SMS provider simulating failure for phone: {}",
                masked_phone
            );
            return Err(ProviderError::provider(SimulatedFailure));
        }

        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;
        *self
            .last_sent
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) =
            Some((phone_number.to_string(), code.to_string()));

        if self.console_output {
            // Console output for development - show the code
            println!("\n{}", "=".repeat(60));
            println!("MOCK SMS PROVIDER - CODE #{}", count);
            println!("{}", "=".repeat(60));
            println!("To: {} (masked: {})", phone_number, masked_phone);
            println!("Code: {}", code);
            println!("{}\n", "=".repeat(60));
        }

        info!(
            target: "sms_service",
            provider = "mock",
            phone = %masked_phone,
            count,
            "Verification code sent (mock)"
        );

        Ok(())
    }

    fn provider_name(&self) -> &str {
        crate::MOCK
    }
}
