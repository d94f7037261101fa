use anyhow::{Context, Result, anyhow};
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{Observer, ResponseRecord};
use crate::paths;

/// Keeps every record in a JSON array file, rewritten in full on each update.
/// Assumes a single writer.
pub struct FileObserver {
    path: PathBuf,
}

impl FileObserver {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Observer for FileObserver {
    fn name(&self) -> &'static str {
        "file"
    }

    fn update(&self, record: &ResponseRecord) -> Result<()> {
        let mut records = load_records(&self.path)?;
        records.push(serde_json::to_value(record)?);
        save_records(&self.path, &records)
    }
}

/// Existing entries are kept as raw JSON so nothing already saved is altered.
pub(crate) fn load_records(path: &Path) -> Result<Vec<Value>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read responses file: {}", path.display()));
        }
    };
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    let parsed: Value = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse responses JSON: {}", path.display()))?;
    match parsed {
        Value::Array(records) => Ok(records),
        _ => Err(anyhow!(
            "responses file is not a JSON array: {}",
            path.display()
        )),
    }
}

fn save_records(path: &Path, records: &[Value]) -> Result<()> {
    paths::ensure_parent(path)
        .with_context(|| format!("failed to create directory for: {}", path.display()))?;
    let content = serde_json::to_string_pretty(records)?;
    fs::write(path, content)
        .with_context(|| format!("failed to write responses file: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(model: &str, response: &str) -> ResponseRecord {
        ResponseRecord {
            timestamp: "2025-03-01T14:05:09.123456".to_string(),
            model: model.to_string(),
            question: "What is Rust?".to_string(),
            response: response.to_string(),
        }
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_records(&dir.path().join("absent.json")).unwrap().is_empty());
    }

    #[test]
    fn appends_to_existing_array() {
        let dir = tempfile::tempdir().unwrap();
        let observer = FileObserver::new(dir.path().join("responses.json"));

        observer.update(&record("chatgpt", "A language.")).unwrap();
        observer.update(&record("groq", "A systems language.")).unwrap();

        let saved: Vec<ResponseRecord> =
            serde_json::from_str(&fs::read_to_string(observer.path()).unwrap()).unwrap();
        assert_eq!(
            saved,
            vec![record("chatgpt", "A language."), record("groq", "A systems language.")]
        );
    }

    #[test]
    fn writes_two_space_indented_json() {
        let dir = tempfile::tempdir().unwrap();
        let observer = FileObserver::new(dir.path().join("responses.json"));
        observer.update(&record("groq", "ok")).unwrap();

        let content = fs::read_to_string(observer.path()).unwrap();
        assert!(content.starts_with("[\n  {\n    \"timestamp\""));
    }

    #[test]
    fn preserves_unknown_fields_of_earlier_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("responses.json");
        fs::write(&path, r#"[{"model":"legacy","extra":true}]"#).unwrap();

        FileObserver::new(&path).update(&record("groq", "ok")).unwrap();

        let saved = load_records(&path).unwrap();
        assert_eq!(saved.len(), 2);
        assert_eq!(saved[0], serde_json::json!({"model": "legacy", "extra": true}));
    }

    #[test]
    fn refuses_to_overwrite_non_array_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("responses.json");
        fs::write(&path, r#"{"not":"an array"}"#).unwrap();

        assert!(FileObserver::new(&path).update(&record("groq", "ok")).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"not":"an array"}"#);
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history/responses.json");
        FileObserver::new(&path).update(&record("chatgpt", "ok")).unwrap();
        assert_eq!(load_records(&path).unwrap().len(), 1);
    }
}
