use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// Pass-through fields merged into the chat-completion body
/// (`temperature`, `max_tokens`, ...).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    fields: Map<String, Value>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }
}

const RESERVED_FIELDS: [&str; 2] = ["model", "messages"];

pub(crate) fn build_request_body(model: &str, prompt: &str, options: &RequestOptions) -> Value {
    let mut body = Map::new();
    body.insert("model".to_string(), json!(model));
    body.insert(
        "messages".to_string(),
        json!([
            {
                "role": "user",
                "content": prompt
            }
        ]),
    );
    for (key, value) in options.iter() {
        if RESERVED_FIELDS.contains(&key.as_str()) {
            tracing::warn!(
                option = %key,
                "ignoring request option that would replace a core field"
            );
            continue;
        }
        body.insert(key.clone(), value.clone());
    }
    Value::Object(body)
}

/// Decoded chat-completion body as returned by the vendor.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Choice {
    pub message: ChoiceMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: u64,
    #[serde(default)]
    pub completion_tokens: u64,
    #[serde(default)]
    pub total_tokens: u64,
}

impl RawResponse {
    pub fn first_content(&self) -> Option<Option<&str>> {
        self.choices
            .first()
            .map(|choice| choice.message.content.as_deref())
    }
}
