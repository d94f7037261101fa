use std::collections::BTreeMap;

use crate::model::ProviderKind;

/// Most recent answer per vendor, for this process only. At most one entry
/// per vendor; a new answer replaces the previous one.
#[derive(Debug, Clone, Default)]
pub struct LastResponses {
    responses: BTreeMap<ProviderKind, String>,
}

impl LastResponses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the answer that was replaced, if any.
    pub fn record(
        &mut self,
        provider: ProviderKind,
        response: impl Into<String>,
    ) -> Option<String> {
        self.responses.insert(provider, response.into())
    }

    pub fn get(&self, provider: ProviderKind) -> Option<&str> {
        self.responses.get(&provider).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    /// ChatGPT then Groq, once both have answered.
    pub fn pair(&self) -> Option<(&str, &str)> {
        Some((
            self.get(ProviderKind::ChatGpt)?,
            self.get(ProviderKind::Groq)?,
        ))
    }
}
