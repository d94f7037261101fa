use super::super::provider_kind::ProviderKind;
use super::ProviderCredentials;
use crate::error::ConfigError;

pub(super) fn resolve_key_internal(
    provider: ProviderKind,
    override_key: Option<&str>,
    credentials: &ProviderCredentials,
) -> Result<String, ConfigError> {
    if let Some(key) = override_key {
        let trimmed = key.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
    }

    credentials
        .get(provider)
        .map(str::to_string)
        .ok_or(ConfigError::MissingCredential {
            provider: provider.display_name(),
            env: provider.key_env(),
        })
}
