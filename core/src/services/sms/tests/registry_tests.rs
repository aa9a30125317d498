use async_trait::async_trait;

use crate::errors::ProviderError;
use crate::services::sms::{open, register, registered_providers, ProviderRegistry, SmsProvider};

struct EchoProvider {
    source: String,
}

#[async_trait]
impl SmsProvider for EchoProvider {
    async fn send_code(&self, _phone_number: &str, code: &str) -> Result<(), ProviderError> {
        if code.is_empty() {
            return Err(ProviderError::provider(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "empty code",
            )));
        }
        Ok(())
    }

    fn provider_name(&self) -> &str {
        &self.source
    }
}

fn open_echo(source: &str) -> Result<Box<dyn SmsProvider>, ProviderError> {
    Ok(Box::new(EchoProvider {
        source: source.to_string(),
    }))
}

fn open_failing(_source: &str) -> Result<Box<dyn SmsProvider>, ProviderError> {
    Err(ProviderError::provider(std::io::Error::new(
        std::io::ErrorKind::InvalidInput,
        "scheme required",
    )))
}

#[tokio::test]
async fn test_register_and_open() {
    let mut registry = ProviderRegistry::new();
    registry.register("echo", open_echo).unwrap();

    let provider = registry.open("echo", "echo://local").unwrap();
    assert_eq!(provider.provider_name(), "echo://local");
    assert!(provider.send_code("13812345678", "123456").await.is_ok());
    assert_eq!(
        provider.send_code("13812345678", "").await.unwrap_err().to_string(),
        "empty code"
    );
}

#[test]
fn test_duplicate_registration_keeps_first() {
    let mut registry = ProviderRegistry::new();
    registry.register("echo", open_echo).unwrap();

    let err = registry.register("echo", open_failing).unwrap_err();
    assert!(matches!(err, ProviderError::DuplicateProvider { ref name } if name == "echo"));
    assert!(registry.open("echo", "x").is_ok());
}

#[test]
fn test_empty_name_rejected() {
    let mut registry = ProviderRegistry::new();
    assert!(matches!(
        registry.register("", open_echo),
        Err(ProviderError::EmptyProviderName)
    ));
    assert!(registry.names().is_empty());
}

#[test]
fn test_open_unknown_provider() {
    let registry = ProviderRegistry::new();
    match registry.open("aliyun", "https://dysmsapi.aliyuncs.com") {
        Err(ProviderError::UnknownProvider { name }) => assert_eq!(name, "aliyun"),
        Err(e) => panic!("unexpected error: {}", e),
        Ok(_) => panic!("expected unknown provider"),
    }
}

#[test]
fn test_open_surfaces_opener_error() {
    let mut registry = ProviderRegistry::new();
    registry.register("broken", open_failing).unwrap();

    let err = registry.open("broken", "").err().unwrap();
    assert_eq!(err.to_string(), "scheme required");
    assert!(err.downcast_ref::<std::io::Error>().is_some());
}

#[test]
fn test_names_sorted() {
    let mut registry = ProviderRegistry::new();
    registry.register("mock", open_echo).unwrap();
    registry.register("aliyun", open_echo).unwrap();

    assert_eq!(registry.names(), vec!["aliyun".to_string(), "mock".to_string()]);
    assert!(registry.contains("mock"));
    assert!(!registry.contains("twilio"));
}

#[test]
fn test_default_registry() {
    register("core-test-echo", open_echo).unwrap();
    assert!(register("core-test-echo", open_echo).is_err());
    assert!(registered_providers().contains(&"core-test-echo".to_string()));

    let provider = open("core-test-echo", "source").unwrap();
    assert_eq!(provider.provider_name(), "source");
}
