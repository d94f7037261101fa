use thiserror::Error;

/// Problems with what the user asked for or how the tool is configured.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unsupported connection kind: '{0}' (expected 'chatgpt' or 'groq')")]
    UnsupportedKind(String),

    #[error("API key not found for {provider}; set {env} in the environment or .env file")]
    MissingCredential {
        provider: &'static str,
        env: &'static str,
    },

    #[error("strategy '{0}' not found")]
    UnknownStrategy(String),
}

/// Why a chat-completion exchange produced no text.
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("request to {provider} failed: {source}")]
    Transport {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} API error ({status}): {message}")]
    Api {
        provider: &'static str,
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("failed to parse {provider} response JSON: {source}")]
    Decode {
        provider: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{provider} returned no choices")]
    NoChoices { provider: &'static str },

    #[error("{provider} returned a choice without message content")]
    MissingContent { provider: &'static str },
}
