use std::collections::BTreeMap;

use reqwest::Method;

/// A generic RPC request against any Alibaba Cloud product
#[derive(Debug, Clone)]
pub struct CommonRequest {
    pub method: Method,
    pub scheme: String,
    pub domain: String,
    /// API version, e.g. `2017-05-25`
    pub version: String,
    /// API action, e.g. `SendSms`
    pub api_name: String,
    /// Business parameters, sent in the query string
    pub query_params: BTreeMap<String, String>,
}

impl CommonRequest {
    pub fn new() -> Self {
        Self {
            method: Method::POST,
            scheme: String::from("https"),
            domain: String::new(),
            version: String::new(),
            api_name: String::new(),
            query_params: BTreeMap::new(),
        }
    }
}

impl Default for CommonRequest {
    fn default() -> Self {
        Self::new()
    }
}

/// Raw response of a common request
#[derive(Debug, Clone)]
pub struct CommonResponse {
    status: u16,
    body: Vec<u8>,
}

impl CommonResponse {
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn http_content_bytes(&self) -> &[u8] {
        &self.body
    }

    pub fn http_content_string(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
