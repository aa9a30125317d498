//! Connection string parsing
//!
//! Format of a source:
//!
//! ```text
//! $scheme://$domain?version=..&api_name=..&access_key=..&access_secret=..&sign_name=..&template_code=..[&region_id=..]
//! ```

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Region used when the source has no `region_id`
pub const DEFAULT_REGION_ID: &str = "default";

/// Errors raised while parsing a connection string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("scheme required")]
    SchemeRequired,

    #[error("invalid source url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("missing required key {0:?}")]
    MissingKey(&'static str),
}

/// Aliyun SMS options
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    pub scheme: String,
    pub domain: String,

    pub version: String,
    pub api_name: String,
    pub access_key: String,
    pub access_secret: String,
    pub sign_name: String,
    pub template_code: String,

    pub region_id: String,
}

impl Options {
    /// Parse a connection string
    ///
    /// Required keys that are absent or empty are reported by name. When a key
    /// is repeated the first value is used.
    ///
    /// The domain is the normalized URL host: lowercased, with the scheme's
    /// default port dropped (`https://Host:443` yields `host`).
    pub fn parse(source: &str) -> Result<Self, SourceError> {
        let url = match Url::parse(source) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => return Err(SourceError::SchemeRequired),
            Err(e) => return Err(SourceError::InvalidUrl(e)),
        };
        if url.scheme().is_empty() {
            return Err(SourceError::SchemeRequired);
        }

        let domain = match (url.host_str(), url.port()) {
            (Some(host), Some(port)) => format!("{}:{}", host, port),
            (Some(host), None) => host.to_string(),
            (None, _) => String::new(),
        };

        let mut query: HashMap<String, String> = HashMap::new();
        for (key, value) in url.query_pairs() {
            query.entry(key.into_owned()).or_insert_with(|| value.into_owned());
        }
        let required = |key: &'static str| -> Result<String, SourceError> {
            match query.get(key) {
                Some(value) if !value.is_empty() => Ok(value.clone()),
                _ => Err(SourceError::MissingKey(key)),
            }
        };

        Ok(Self {
            scheme: url.scheme().to_string(),
            domain,
            version: required("version")?,
            api_name: required("api_name")?,
            access_key: required("access_key")?,
            access_secret: required("access_secret")?,
            sign_name: required("sign_name")?,
            template_code: required("template_code")?,
            region_id: query
                .get("region_id")
                .filter(|value| !value.is_empty())
                .cloned()
                .unwrap_or_else(|| DEFAULT_REGION_ID.to_string()),
        })
    }
}

impl FromStr for Options {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Options {
    /// Render back to connection string form, keys sorted
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("access_key", &self.access_key)
            .append_pair("access_secret", &self.access_secret)
            .append_pair("api_name", &self.api_name)
            .append_pair("region_id", &self.region_id)
            .append_pair("sign_name", &self.sign_name)
            .append_pair("template_code", &self.template_code)
            .append_pair("version", &self.version)
            .finish();
        write!(f, "{}://{}?{}", self.scheme, self.domain, query)
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("scheme", &self.scheme)
            .field("domain", &self.domain)
            .field("version", &self.version)
            .field("api_name", &self.api_name)
            .field("access_key", &self.access_key)
            .field("access_secret", &"******")
            .field("sign_name", &self.sign_name)
            .field("template_code", &self.template_code)
            .field("region_id", &self.region_id)
            .finish()
    }
}
