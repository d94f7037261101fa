mod api_error;
mod factory;
mod wire;

use std::future::Future;
use std::pin::Pin;

use crate::error::ConnectionError;
use crate::model::ProviderKind;

use api_error::extract_api_error;

pub use factory::{ConnectionFactory, ConnectionSource};
pub use wire::{Choice, ChoiceMessage, RawResponse, RequestOptions, Usage};

pub type ConnectionFuture<'a, T> =
    Pin<Box<dyn Future<Output = Result<T, ConnectionError>> + Send + 'a>>;

/// Uniform prompt-in / text-out contract over a vendor chat-completion API.
///
/// Failures are returned as [`ConnectionError`] values and logged where they
/// happen; implementations never panic on vendor or shape errors.
pub trait Connection: Send + Sync {
    fn provider(&self) -> ProviderKind;

    fn model_name(&self) -> &str;

    fn send_request<'a>(
        &'a self,
        prompt: &'a str,
        options: &'a RequestOptions,
    ) -> ConnectionFuture<'a, RawResponse>;

    fn get_response(&self, response: &RawResponse) -> Result<String, ConnectionError>;

    /// `send_request` followed by `get_response`.
    fn ask<'a>(
        &'a self,
        prompt: &'a str,
        options: &'a RequestOptions,
    ) -> ConnectionFuture<'a, String> {
        Box::pin(async move {
            let raw = self.send_request(prompt, options).await?;
            self.get_response(&raw)
        })
    }
}

/// Chat-completions connection shared by both vendors; they differ only in
/// endpoint, credential and default model.
#[derive(Debug, Clone)]
pub struct ApiConnection {
    provider: ProviderKind,
    api_key: String,
    model: String,
    base_url: String,
    http: reqwest::Client,
}

impl ApiConnection {
    pub fn new(
        provider: ProviderKind,
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    async fn post_chat(
        &self,
        prompt: &str,
        options: &RequestOptions,
    ) -> Result<RawResponse, ConnectionError> {
        let provider = self.provider.display_name();
        let body = wire::build_request_body(&self.model, prompt, options);
        tracing::debug!(provider, model = %self.model, "sending chat completion request");

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|source| ConnectionError::Transport { provider, source })?;
        let status = response.status();
        let payload = response
            .text()
            .await
            .map_err(|source| ConnectionError::Transport { provider, source })?;
        if !status.is_success() {
            return Err(ConnectionError::Api {
                provider,
                status,
                message: extract_api_error(&payload),
            });
        }

        let parsed: RawResponse = serde_json::from_str(&payload)
            .map_err(|source| ConnectionError::Decode { provider, source })?;
        if let Some(usage) = &parsed.usage {
            tracing::debug!(
                provider,
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "chat completion received"
            );
        }
        Ok(parsed)
    }
}

impl Connection for ApiConnection {
    fn provider(&self) -> ProviderKind {
        self.provider
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    fn send_request<'a>(
        &'a self,
        prompt: &'a str,
        options: &'a RequestOptions,
    ) -> ConnectionFuture<'a, RawResponse> {
        Box::pin(async move {
            self.post_chat(prompt, options)
                .await
                .inspect_err(|err| tracing::error!("error sending request to the API: {err}"))
        })
    }

    fn get_response(&self, response: &RawResponse) -> Result<String, ConnectionError> {
        let provider = self.provider.display_name();
        match response.first_content() {
            Some(Some(content)) => Ok(content.to_string()),
            Some(None) => Err(ConnectionError::MissingContent { provider }),
            None => Err(ConnectionError::NoChoices { provider }),
        }
        .inspect_err(|err| tracing::warn!("error reading the API response: {err}"))
    }
}
