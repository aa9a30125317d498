use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use tracing::{debug, error};
use uuid::Uuid;

use super::request::{CommonRequest, CommonResponse};
use super::sign::{self, SIGNATURE_METHOD, SIGNATURE_VERSION};
use super::SdkError;

/// Timeout for a whole request/response exchange
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
/// Timeout for establishing the connection
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Access key pair used to sign requests
#[derive(Clone)]
pub struct AccessKeyCredential {
    pub access_key_id: String,
    pub access_key_secret: String,
}

impl std::fmt::Debug for AccessKeyCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessKeyCredential")
            .field("access_key_id", &self.access_key_id)
            .field("access_key_secret", &"******")
            .finish()
    }
}

/// Error body returned by the gateway for non-2xx responses
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ErrorBody {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
    request_id: Option<String>,
}

/// Signing HTTP client bound to one region and access key
#[derive(Debug, Clone)]
pub struct Client {
    region_id: String,
    credential: AccessKeyCredential,
    http: reqwest::Client,
}

impl Client {
    /// Create a client with its own HTTP connection pool
    pub fn with_access_key(
        region_id: &str,
        access_key: &str,
        access_secret: &str,
    ) -> Result<Self, SdkError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;
        Self::with_http_client(region_id, access_key, access_secret, http)
    }

    /// Create a client on top of an existing `reqwest::Client`
    pub fn with_http_client(
        region_id: &str,
        access_key: &str,
        access_secret: &str,
        http: reqwest::Client,
    ) -> Result<Self, SdkError> {
        if access_key.is_empty() {
            return Err(SdkError::InvalidCredentials("access key id is empty"));
        }
        if access_secret.is_empty() {
            return Err(SdkError::InvalidCredentials("access key secret is empty"));
        }
        Ok(Self {
            region_id: region_id.to_string(),
            credential: AccessKeyCredential {
                access_key_id: access_key.to_string(),
                access_key_secret: access_secret.to_string(),
            },
            http,
        })
    }

    pub fn region_id(&self) -> &str {
        &self.region_id
    }

    /// Sign and send `request`
    ///
    /// Non-2xx answers are turned into [`SdkError::Server`]; the body of a 2xx
    /// answer is returned untouched.
    pub async fn process_common_request(
        &self,
        request: &CommonRequest,
    ) -> Result<CommonResponse, SdkError> {
        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
        let nonce = Uuid::new_v4().to_string();
        let url = self.signed_url(request, &timestamp, &nonce)?;

        debug!(
            action = %request.api_name,
            domain = %request.domain,
            nonce = %nonce,
            "Sending Aliyun RPC request"
        );

        let response = self
            .http
            .request(request.method.clone(), url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(String::new())
            .send()
            .await
            .map_err(|e| {
                error!(action = %request.api_name, "Aliyun RPC request failed: {}", e);
                SdkError::Http(e)
            })?;

        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        let response = CommonResponse::new(status, body);

        if !response.is_success() {
            return Err(server_error(&response));
        }
        Ok(response)
    }

    /// Full request URL with public parameters and `Signature` appended
    pub(crate) fn signed_url(
        &self,
        request: &CommonRequest,
        timestamp: &str,
        nonce: &str,
    ) -> Result<String, SdkError> {
        if request.domain.is_empty() {
            return Err(SdkError::InvalidRequest("domain is empty"));
        }
        if request.api_name.is_empty() {
            return Err(SdkError::InvalidRequest("api name is empty"));
        }
        if request.version.is_empty() {
            return Err(SdkError::InvalidRequest("version is empty"));
        }

        let mut params: BTreeMap<String, String> = request.query_params.clone();
        for (key, value) in [
            ("Action", request.api_name.as_str()),
            ("Version", request.version.as_str()),
            ("Format", "JSON"),
            ("AccessKeyId", self.credential.access_key_id.as_str()),
            ("RegionId", self.region_id.as_str()),
            ("SignatureMethod", SIGNATURE_METHOD),
            ("SignatureVersion", SIGNATURE_VERSION),
            ("SignatureNonce", nonce),
            ("Timestamp", timestamp),
        ] {
            params.insert(key.to_string(), value.to_string());
        }

        let canonical = sign::canonicalize(&params);
        let string_to_sign = sign::string_to_sign(request.method.as_str(), &canonical);
        let signature = sign::sign(&self.credential.access_key_secret, &string_to_sign)?;

        Ok(format!(
            "{}://{}/?{}&Signature={}",
            request.scheme,
            request.domain,
            canonical,
            sign::percent_encode(&signature)
        ))
    }
}

fn server_error(response: &CommonResponse) -> SdkError {
    let status = response.status();
    match serde_json::from_slice::<ErrorBody>(response.http_content_bytes()) {
        Ok(body) => SdkError::Server {
            status,
            code: body.code,
            message: body.message,
            request_id: body.request_id,
        },
        Err(_) => SdkError::Server {
            status,
            code: String::new(),
            message: response.http_content_string(),
            request_id: None,
        },
    }
}
