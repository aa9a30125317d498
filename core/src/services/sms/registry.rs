//! String-keyed provider registry

use std::collections::BTreeMap;
use std::sync::RwLock;

use once_cell::sync::Lazy;
use tracing::debug;

use super::traits::SmsProvider;
use crate::errors::ProviderError;

/// Builds a provider from its connection string
pub type Opener = fn(&str) -> Result<Box<dyn SmsProvider>, ProviderError>;

/// Registry mapping provider names to their openers
#[derive(Default)]
pub struct ProviderRegistry {
    openers: BTreeMap<String, Opener>,
}

impl ProviderRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `opener` under `name`
    ///
    /// Fails if `name` is empty or already taken; the existing opener is kept.
    pub fn register(&mut self, name: &str, opener: Opener) -> Result<(), ProviderError> {
        if name.is_empty() {
            return Err(ProviderError::EmptyProviderName);
        }
        if self.openers.contains_key(name) {
            return Err(ProviderError::DuplicateProvider {
                name: name.to_string(),
            });
        }
        debug!(provider = name, "Registered SMS provider");
        self.openers.insert(name.to_string(), opener);
        Ok(())
    }

    /// Open the provider registered as `name` with `source`
    pub fn open(&self, name: &str, source: &str) -> Result<Box<dyn SmsProvider>, ProviderError> {
        let opener = self
            .openers
            .get(name)
            .ok_or_else(|| ProviderError::UnknownProvider {
                name: name.to_string(),
            })?;
        opener(source)
    }

    /// Whether a provider is registered as `name`
    pub fn contains(&self, name: &str) -> bool {
        self.openers.contains_key(name)
    }

    /// Registered provider names, sorted
    pub fn names(&self) -> Vec<String> {
        self.openers.keys().cloned().collect()
    }
}

static DEFAULT_REGISTRY: Lazy<RwLock<ProviderRegistry>> =
    Lazy::new(|| RwLock::new(ProviderRegistry::new()));

/// Register `opener` as `name` in the process-wide registry
pub fn register(name: &str, opener: Opener) -> Result<(), ProviderError> {
    // Inserts are a single map operation, so a poisoned lock still guards a valid map.
    let mut registry = DEFAULT_REGISTRY
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    registry.register(name, opener)
}

/// Open a provider from the process-wide registry
pub fn open(name: &str, source: &str) -> Result<Box<dyn SmsProvider>, ProviderError> {
    let registry = DEFAULT_REGISTRY
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    registry.open(name, source)
}

/// Names registered in the process-wide registry, sorted
pub fn registered_providers() -> Vec<String> {
    let registry = DEFAULT_REGISTRY
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    registry.names()
}
