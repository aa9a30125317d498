//! Send one verification code through the provider selected by the environment
//!
//! ```text
//! SMS_PROVIDER=aliyun \
//! SMS_SOURCE='https://dysmsapi.aliyuncs.com?version=2017-05-25&api_name=SendSms&access_key=..&access_secret=..&sign_name=..&template_code=..' \
//! cargo run -p sms_infra --example send_code -- 13812345678 123456
//! ```

use anyhow::Context;
use sms_core::SmsProvider;
use sms_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();
    sms_shared::logging::init(&config.logging).context("failed to initialize logging")?;

    let mut args = std::env::args().skip(1);
    let phone = args.next().context("usage: send_code <phone> [code]")?;
    let code = args.next().unwrap_or_else(|| String::from("123456"));

    sms_infra::register_default_providers()?;
    let provider = sms_core::services::sms::open(&config.sms.provider, &config.sms.source)
        .with_context(|| format!("failed to open SMS provider {:?}", config.sms.provider))?;

    tracing::info!(
        provider = provider.provider_name(),
        environment = %config.environment,
        "Sending verification code"
    );
    provider
        .send_code(&phone, &code)
        .await
        .context("failed to send verification code")?;

    println!("Verification code sent via {}", provider.provider_name());
    Ok(())
}
