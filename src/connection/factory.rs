use std::collections::BTreeMap;

use super::{ApiConnection, Connection};
use crate::config::{AppConfig, ProviderSettings};
use crate::error::ConfigError;
use crate::model::{self, ProviderCredentials, ProviderKind};

/// Where the CLI gets a fresh connection for each question.
pub trait ConnectionSource: Send + Sync {
    fn has_credential(&self, provider: ProviderKind) -> bool;

    fn connect(&self, provider: ProviderKind) -> Result<Box<dyn Connection>, ConfigError>;
}

/// Builds connections from a vendor key. Construction never touches the
/// network.
#[derive(Debug, Clone)]
pub struct ConnectionFactory {
    credentials: ProviderCredentials,
    settings: BTreeMap<ProviderKind, ProviderSettings>,
}

impl ConnectionFactory {
    pub fn new(credentials: ProviderCredentials) -> Self {
        let settings = ProviderKind::ALL
            .into_iter()
            .map(|kind| (kind, ProviderSettings::defaults(kind)))
            .collect();
        Self {
            credentials,
            settings,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        config.providers.iter().fold(
            Self::new(config.credentials.clone()),
            |factory, (kind, settings)| factory.with_settings(*kind, settings.clone()),
        )
    }

    pub fn with_settings(mut self, kind: ProviderKind, settings: ProviderSettings) -> Self {
        self.settings.insert(kind, settings);
        self
    }

    /// Resolve `kind` by name and build its connection. A blank or absent
    /// `credential` falls back to the key configured at startup.
    pub fn create(
        &self,
        kind: &str,
        credential: Option<&str>,
    ) -> Result<Box<dyn Connection>, ConfigError> {
        let provider = model::provider_from_name(kind)
            .ok_or_else(|| ConfigError::UnsupportedKind(kind.to_string()))?;
        let connection = self.create_for(provider, credential)?;
        Ok(Box::new(connection))
    }

    pub fn create_for(
        &self,
        provider: ProviderKind,
        credential: Option<&str>,
    ) -> Result<ApiConnection, ConfigError> {
        let api_key = model::resolve_key(provider, credential, &self.credentials)?;
        let settings = self
            .settings
            .get(&provider)
            .cloned()
            .unwrap_or_else(|| ProviderSettings::defaults(provider));
        tracing::debug!(
            provider = provider.as_str(),
            model = %settings.model,
            "creating connection"
        );
        Ok(ApiConnection::new(
            provider,
            api_key,
            settings.model,
            settings.base_url,
        ))
    }
}

impl ConnectionSource for ConnectionFactory {
    fn has_credential(&self, provider: ProviderKind) -> bool {
        self.credentials.get(provider).is_some()
    }

    fn connect(&self, provider: ProviderKind) -> Result<Box<dyn Connection>, ConfigError> {
        self.create(provider.as_str(), None)
    }
}
