//! Aliyun SMS client
//!
//! Adapts the RPC SDK to the [`SmsProvider`] contract: one `SendSms` call per
//! code, the code passed as the template parameter `code`.

use async_trait::async_trait;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use sms_core::{ProviderError, SmsProvider};
use sms_shared::phone::mask_phone_numbers;
use tracing::{debug, info, warn};

use super::error::AliyunError;
use super::options::Options;
use super::sdk::{self, CommonRequest};

/// `Code` of an accepted request
const CODE_OK: &str = "OK";

#[derive(Serialize)]
struct TemplateParam<'a> {
    code: &'a str,
}

/// Body of a `SendSms` response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct SendSmsResponse {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
    pub request_id: Option<String>,
    pub biz_id: Option<String>,
}

/// Aliyun SMS provider
#[derive(Debug, Clone)]
pub struct AliyunSmsClient {
    options: Options,
    sdk_client: sdk::Client,
}

impl AliyunSmsClient {
    /// Create a client from parsed options
    pub fn new(options: Options) -> Result<Self, AliyunError> {
        let sdk_client = sdk::Client::with_access_key(
            &options.region_id,
            &options.access_key,
            &options.access_secret,
        )?;
        Ok(Self::with_sdk_client(options, sdk_client))
    }

    /// Create a client on top of a preconfigured SDK client
    pub fn with_sdk_client(options: Options, sdk_client: sdk::Client) -> Self {
        info!(
            domain = %options.domain,
            region_id = %options.region_id,
            api_name = %options.api_name,
            "Aliyun SMS client initialized"
        );
        Self { options, sdk_client }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Send `code` to `phone_number` using the configured sign and template
    pub async fn send_code(&self, phone_number: &str, code: &str) -> Result<(), AliyunError> {
        let masked = mask_phone_numbers(phone_number);
        let request = self.build_request(phone_number, code)?;

        debug!(phone = %masked, template_code = %self.options.template_code, "Sending verification code");

        let response = self.sdk_client.process_common_request(&request).await?;
        let result = check_response(response.http_content_bytes())?;

        info!(
            target: "sms_service",
            provider = "aliyun",
            phone = %masked,
            request_id = result.request_id.as_deref().unwrap_or_default(),
            biz_id = result.biz_id.as_deref().unwrap_or_default(),
            "Verification code sent"
        );
        Ok(())
    }

    pub(crate) fn build_request(
        &self,
        phone_number: &str,
        code: &str,
    ) -> Result<CommonRequest, AliyunError> {
        let mut request = CommonRequest::new();
        request.method = Method::POST;
        request.scheme = self.options.scheme.clone();
        request.domain = self.options.domain.clone();
        request.version = self.options.version.clone();
        request.api_name = self.options.api_name.clone();

        let params = &mut request.query_params;
        params.insert("SignName".to_string(), self.options.sign_name.clone());
        params.insert("TemplateCode".to_string(), self.options.template_code.clone());
        params.insert("PhoneNumbers".to_string(), phone_number.to_string());
        params.insert(
            "TemplateParam".to_string(),
            serde_json::to_string(&TemplateParam { code })?,
        );
        Ok(request)
    }
}

/// Map a `SendSms` body to success or [`AliyunError::Rejected`]
pub(crate) fn check_response(body: &[u8]) -> Result<SendSmsResponse, AliyunError> {
    let result: SendSmsResponse = serde_json::from_slice(body)?;
    if result.code != CODE_OK {
        warn!(
            code = %result.code,
            request_id = result.request_id.as_deref().unwrap_or_default(),
            "Aliyun rejected SMS: {}",
            result.message
        );
        return Err(AliyunError::Rejected {
            code: result.code,
            message: result.message,
        });
    }
    Ok(result)
}

#[async_trait]
impl SmsProvider for AliyunSmsClient {
    async fn send_code(&self, phone_number: &str, code: &str) -> Result<(), ProviderError> {
        AliyunSmsClient::send_code(self, phone_number, code)
            .await
            .map_err(ProviderError::from)
    }

    fn provider_name(&self) -> &str {
        crate::ALIYUN
    }
}
