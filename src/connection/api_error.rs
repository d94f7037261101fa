use serde::Deserialize;

/// Pull a readable message out of an OpenAI-compatible error body.
pub(crate) fn extract_api_error(body: &str) -> String {
    #[derive(Debug, Deserialize)]
    struct ErrorEnvelope {
        error: Option<ApiError>,
    }
    #[derive(Debug, Deserialize)]
    struct ApiError {
        message: Option<String>,
        #[serde(rename = "type")]
        kind: Option<String>,
        code: Option<serde_json::Value>,
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorEnvelope>(body)
        && let Some(err) = parsed.error
    {
        let message = err.message.unwrap_or_else(|| "unknown error".to_string());
        let kind = err.kind.unwrap_or_else(|| "unknown".to_string());
        let code = match err.code {
            Some(serde_json::Value::String(code)) => code,
            Some(serde_json::Value::Null) | None => "none".to_string(),
            Some(other) => other.to_string(),
        };
        return format!("{} (type={}, code={})", message, kind, code);
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "empty response body".to_string();
    }
    trimmed.to_string()
}
