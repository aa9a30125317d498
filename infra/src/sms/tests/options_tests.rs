//! Unit tests for connection string parsing

use crate::sms::aliyun::options::DEFAULT_REGION_ID;
use crate::sms::{Options, SourceError};

const SOURCE: &str = "https://dysmsapi.aliyuncs.com?version=2017-05-25&api_name=SendSms\
    &access_key=LTAI4Fw2&access_secret=s3cr3t&sign_name=Doge&template_code=SMS_153055065\
    &region_id=cn-hangzhou";

fn without(key: &str) -> String {
    let (base, query) = SOURCE.split_once('?').unwrap();
    let query = query
        .split('&')
        .filter(|pair| !pair.starts_with(&format!("{}=", key)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", base, query)
}

#[test]
fn test_parse_field_mapping() {
    let options = Options::parse(SOURCE).unwrap();
    assert_eq!(options.scheme, "https");
    assert_eq!(options.domain, "dysmsapi.aliyuncs.com");
    assert_eq!(options.version, "2017-05-25");
    assert_eq!(options.api_name, "SendSms");
    assert_eq!(options.access_key, "LTAI4Fw2");
    assert_eq!(options.access_secret, "s3cr3t");
    assert_eq!(options.sign_name, "Doge");
    assert_eq!(options.template_code, "SMS_153055065");
    assert_eq!(options.region_id, "cn-hangzhou");
}

#[test]
fn test_region_id_defaults() {
    let options = Options::parse(&without("region_id")).unwrap();
    assert_eq!(options.region_id, DEFAULT_REGION_ID);
    assert_eq!(options.region_id, "default");
}

#[test]
fn test_missing_required_keys() {
    for key in [
        "version",
        "api_name",
        "access_key",
        "access_secret",
        "sign_name",
        "template_code",
    ] {
        match Options::parse(&without(key)) {
            Err(SourceError::MissingKey(missing)) => assert_eq!(missing, key),
            other => panic!("expected missing {}, got {:?}", key, other),
        }
    }
}

#[test]
fn test_empty_required_value_is_missing() {
    let source = SOURCE.replace("sign_name=Doge", "sign_name=");
    assert_eq!(
        Options::parse(&source).unwrap_err(),
        SourceError::MissingKey("sign_name")
    );
}

#[test]
fn test_scheme_required() {
    let source = SOURCE.trim_start_matches("https://");
    assert_eq!(Options::parse(source).unwrap_err(), SourceError::SchemeRequired);
    assert_eq!(Options::parse("").unwrap_err(), SourceError::SchemeRequired);
}

#[test]
fn test_invalid_url() {
    let err = Options::parse("https://[::1?version=1").unwrap_err();
    assert!(matches!(err, SourceError::InvalidUrl(_)));
}

#[test]
fn test_domain_keeps_port_and_decodes_values() {
    let source = "http://127.0.0.1:8080?version=2017-05-25&api_name=SendSms&access_key=id\
        &access_secret=a%2Bb%3D&sign_name=%E9%98%BF%E9%87%8C%E4%BA%91&template_code=SMS_1";
    let options: Options = source.parse().unwrap();
    assert_eq!(options.scheme, "http");
    assert_eq!(options.domain, "127.0.0.1:8080");
    assert_eq!(options.access_secret, "a+b=");
    assert_eq!(options.sign_name, "阿里云");
}

#[test]
fn test_domain_is_normalized() {
    let source = SOURCE.replace("https://dysmsapi.aliyuncs.com", "https://DysmsAPI.aliyuncs.com:443");
    assert_eq!(Options::parse(&source).unwrap().domain, "dysmsapi.aliyuncs.com");

    let source = SOURCE.replace("https://dysmsapi.aliyuncs.com", "https://dysmsapi.aliyuncs.com:8443");
    assert_eq!(Options::parse(&source).unwrap().domain, "dysmsapi.aliyuncs.com:8443");
}

#[test]
fn test_first_value_wins() {
    let source = format!("{}&version=2099-01-01", SOURCE);
    assert_eq!(Options::parse(&source).unwrap().version, "2017-05-25");
}

#[test]
fn test_display_parses_back() {
    let source = SOURCE.replace("sign_name=Doge", "sign_name=%E9%98%BF%E9%87%8C%E4%BA%91");
    let options = Options::parse(&source).unwrap();
    let rendered = options.to_string();

    assert!(rendered.starts_with("https://dysmsapi.aliyuncs.com?access_key=LTAI4Fw2&access_secret="));
    assert_eq!(Options::parse(&rendered).unwrap(), options);
}

#[test]
fn test_debug_redacts_secret() {
    let rendered = format!("{:?}", Options::parse(SOURCE).unwrap());
    assert!(rendered.contains("LTAI4Fw2"));
    assert!(!rendered.contains("s3cr3t"));
}
