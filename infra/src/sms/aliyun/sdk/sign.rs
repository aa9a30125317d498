//! RPC signature, version 1.0
//!
//! ```text
//! StringToSign = METHOD + "&" + enc("/") + "&" + enc(canonical query)
//! Signature    = base64(HMAC-SHA1(AccessKeySecret + "&", StringToSign))
//! ```

use std::collections::BTreeMap;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use sha1::Sha1;

use super::SdkError;

pub const SIGNATURE_METHOD: &str = "HMAC-SHA1";
pub const SIGNATURE_VERSION: &str = "1.0";

/// RFC 3986 unreserved characters stay literal
const RFC3986: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

type HmacSha1 = Hmac<Sha1>;

/// Percent-encode a key or value
pub fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, RFC3986).to_string()
}

/// `k=v` pairs sorted by key, both sides encoded, joined by `&`
pub fn canonicalize(params: &BTreeMap<String, String>) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", percent_encode(key), percent_encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

pub fn string_to_sign(method: &str, canonical_query: &str) -> String {
    format!(
        "{}&{}&{}",
        method,
        percent_encode("/"),
        percent_encode(canonical_query)
    )
}

pub fn sign(access_secret: &str, string_to_sign: &str) -> Result<String, SdkError> {
    let key = format!("{}&", access_secret);
    let mut mac = HmacSha1::new_from_slice(key.as_bytes())
        .map_err(|_| SdkError::InvalidCredentials("access secret rejected by HMAC"))?;
    mac.update(string_to_sign.as_bytes());
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}
