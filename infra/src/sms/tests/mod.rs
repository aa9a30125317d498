//! Unit tests for SMS module

#[cfg(feature = "aliyun-sms")]
mod options_tests;
