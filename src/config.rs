use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::cli::Cli;
use crate::connection::RequestOptions;
use crate::model::{self, ProviderCredentials, ProviderKind};
use crate::paths;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    pub model: String,
    pub base_url: String,
}

impl ProviderSettings {
    pub fn defaults(kind: ProviderKind) -> Self {
        Self {
            model: model::default_model(kind).to_string(),
            base_url: model::default_base_url(kind).to_string(),
        }
    }

    fn with_overrides(kind: ProviderKind, model: Option<&str>, base_url: Option<&str>) -> Self {
        let mut settings = Self::defaults(kind);
        if let Some(value) = non_blank(model) {
            settings.model = value;
        }
        if let Some(value) = non_blank(base_url) {
            settings.base_url = value;
        }
        settings
    }
}

/// Everything the session needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub credentials: ProviderCredentials,
    pub providers: BTreeMap<ProviderKind, ProviderSettings>,
    pub request_options: RequestOptions,
    pub responses_path: PathBuf,
    pub log_path: PathBuf,
}

impl AppConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        let mut credentials = ProviderCredentials::new();
        if let Some(key) = cli.openai_key.as_deref() {
            credentials.insert(ProviderKind::ChatGpt, key);
        }
        if let Some(key) = cli.groq_key.as_deref() {
            credentials.insert(ProviderKind::Groq, key);
        }

        let providers = BTreeMap::from([
            (
                ProviderKind::ChatGpt,
                ProviderSettings::with_overrides(
                    ProviderKind::ChatGpt,
                    cli.openai_model.as_deref(),
                    cli.openai_base_url.as_deref(),
                ),
            ),
            (
                ProviderKind::Groq,
                ProviderSettings::with_overrides(
                    ProviderKind::Groq,
                    cli.groq_model.as_deref(),
                    cli.groq_base_url.as_deref(),
                ),
            ),
        ]);

        let mut request_options = RequestOptions::new();
        if let Some(temperature) = cli.temperature {
            request_options = request_options.with("temperature", temperature);
        }

        Self {
            credentials,
            providers,
            request_options,
            responses_path: paths::resolve_file(&cli.responses_file, paths::DEFAULT_RESPONSES_FILE),
            log_path: paths::resolve_file(&cli.log_file, paths::DEFAULT_LOG_FILE),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
