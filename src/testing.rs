use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use anyhow::Result;

use crate::connection::{
    Connection, ConnectionFuture, ConnectionSource, RawResponse, RequestOptions,
};
use crate::error::{ConfigError, ConnectionError};
use crate::model::ProviderKind;
use crate::prompter::LineInput;

/// Connection double that replays canned answers and records prompts.
pub struct ScriptedConnection {
    provider: ProviderKind,
    replies: Arc<Mutex<VecDeque<Option<&'static str>>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedConnection {
    /// `None` entries simulate a failed exchange.
    pub fn new(provider: ProviderKind, replies: Vec<Option<&'static str>>) -> Self {
        Self {
            provider,
            replies: Arc::new(Mutex::new(replies.into())),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl Connection for ScriptedConnection {
    fn provider(&self) -> ProviderKind {
        self.provider
    }

    fn model_name(&self) -> &str {
        "scripted"
    }

    fn send_request<'a>(
        &'a self,
        prompt: &'a str,
        _options: &'a RequestOptions,
    ) -> ConnectionFuture<'a, RawResponse> {
        Box::pin(async move {
            self.prompts.lock().unwrap().push(prompt.to_string());
            let next = self.replies.lock().unwrap().pop_front().flatten();
            match next {
                Some(text) => Ok(serde_json::from_value(serde_json::json!({
                    "choices": [{"message": {"role": "assistant", "content": text}}]
                }))
                .unwrap()),
                None => Err(ConnectionError::NoChoices {
                    provider: self.provider.display_name(),
                }),
            }
        })
    }

    fn get_response(&self, response: &RawResponse) -> Result<String, ConnectionError> {
        response
            .first_content()
            .flatten()
            .map(str::to_string)
            .ok_or(ConnectionError::MissingContent {
                provider: self.provider.display_name(),
            })
    }
}

/// Hands out scripted connections that share one reply queue and prompt log
/// per vendor.
#[derive(Default)]
pub struct ScriptedSource {
    replies: Mutex<Vec<(ProviderKind, Arc<Mutex<VecDeque<Option<&'static str>>>>)>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_replies(self, provider: ProviderKind, replies: Vec<Option<&'static str>>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push((provider, Arc::new(Mutex::new(replies.into()))));
        self
    }

    pub fn prompt_log(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.prompts)
    }
}

impl ConnectionSource for ScriptedSource {
    fn has_credential(&self, provider: ProviderKind) -> bool {
        self.replies
            .lock()
            .unwrap()
            .iter()
            .any(|(kind, _)| *kind == provider)
    }

    fn connect(&self, provider: ProviderKind) -> Result<Box<dyn Connection>, ConfigError> {
        let replies = self
            .replies
            .lock()
            .unwrap()
            .iter()
            .find(|(kind, _)| *kind == provider)
            .map(|(_, queue)| Arc::clone(queue))
            .ok_or(ConfigError::MissingCredential {
                provider: provider.display_name(),
                env: provider.key_env(),
            })?;
        Ok(Box::new(ScriptedConnection {
            provider,
            replies,
            prompts: Arc::clone(&self.prompts),
        }))
    }
}

/// Line source fed from a fixed script; `None` once exhausted.
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl LineInput for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}
