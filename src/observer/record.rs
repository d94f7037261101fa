use serde::{Deserialize, Serialize};

use super::time::now_iso;

/// One question/answer exchange. Never mutated once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseRecord {
    pub timestamp: String,
    pub model: String,
    pub question: String,
    pub response: String,
}

impl ResponseRecord {
    pub fn new(
        model: impl Into<String>,
        question: impl Into<String>,
        response: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: now_iso(),
            model: model.into(),
            question: question.into(),
            response: response.into(),
        }
    }
}
