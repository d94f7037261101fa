use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProviderKind {
    ChatGpt,
    Groq,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 2] = [ProviderKind::ChatGpt, ProviderKind::Groq];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::ChatGpt => "chatgpt",
            ProviderKind::Groq => "groq",
        }
    }

    /// Human readable vendor name used in menus and messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderKind::ChatGpt => "ChatGPT",
            ProviderKind::Groq => "Groq",
        }
    }

    pub fn key_env(&self) -> &'static str {
        match self {
            ProviderKind::ChatGpt => "OPENAI_API_KEY",
            ProviderKind::Groq => "GROQ_API_KEY",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn default_model(provider: ProviderKind) -> &'static str {
    match provider {
        ProviderKind::ChatGpt => "gpt-4o-mini",
        ProviderKind::Groq => "deepseek-r1-distill-llama-70b",
    }
}

pub fn default_base_url(provider: ProviderKind) -> &'static str {
    match provider {
        ProviderKind::ChatGpt => "https://api.openai.com/v1",
        ProviderKind::Groq => "https://api.groq.com/openai/v1",
    }
}

/// Exact, case-insensitive match on the wire name.
pub fn provider_from_name(name: &str) -> Option<ProviderKind> {
    match name.to_lowercase().as_str() {
        "chatgpt" => Some(ProviderKind::ChatGpt),
        "groq" => Some(ProviderKind::Groq),
        _ => None,
    }
}
