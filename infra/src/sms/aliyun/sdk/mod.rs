//! Minimal Alibaba Cloud RPC SDK
//!
//! Provides the vendor's common request model: callers fill a
//! [`CommonRequest`] with the API coordinates and business parameters, and
//! [`Client::process_common_request`] adds the public parameters, signs the
//! request (signature version 1.0, HMAC-SHA1) and sends it.

mod client;
mod request;
pub mod sign;

pub use client::{AccessKeyCredential, Client};
pub use request::{CommonRequest, CommonResponse};

use thiserror::Error;

/// SDK-level errors
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("invalid credentials: {0}")]
    InvalidCredentials(&'static str),

    #[error("invalid request: {0}")]
    InvalidRequest(&'static str),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-2xx status
    #[error("server error (HTTP {status}) {code}: {message}")]
    Server {
        status: u16,
        code: String,
        message: String,
        request_id: Option<String>,
    },
}
