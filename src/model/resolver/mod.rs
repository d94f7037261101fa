mod key;

use std::collections::BTreeMap;

use super::provider_kind::ProviderKind;
use crate::error::ConfigError;

/// Credentials captured once at startup, keyed by vendor.
#[derive(Debug, Clone, Default)]
pub struct ProviderCredentials {
    keys: BTreeMap<ProviderKind, String>,
}

impl ProviderCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with(mut self, kind: ProviderKind, key: impl Into<String>) -> Self {
        self.insert(kind, key);
        self
    }

    pub fn insert(&mut self, kind: ProviderKind, key: impl Into<String>) {
        let key = key.into();
        let trimmed = key.trim();
        if trimmed.is_empty() {
            self.keys.remove(&kind);
        } else {
            self.keys.insert(kind, trimmed.to_string());
        }
    }

    pub fn get(&self, kind: ProviderKind) -> Option<&str> {
        self.keys.get(&kind).map(String::as_str)
    }
}

pub fn resolve_key(
    provider: ProviderKind,
    override_key: Option<&str>,
    credentials: &ProviderCredentials,
) -> Result<String, ConfigError> {
    key::resolve_key_internal(provider, override_key, credentials)
}
