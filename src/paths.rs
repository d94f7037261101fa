use std::path::{Path, PathBuf};

pub const DEFAULT_RESPONSES_FILE: &str = "responses.json";
pub const DEFAULT_LOG_FILE: &str = "responses.log";

/// Turn a user-supplied file location into a path, expanding `~`.
/// Blank input falls back to `default`, relative to the working directory.
pub fn resolve_file(value: &str, default: &str) -> PathBuf {
    normalize_file(value).unwrap_or_else(|| PathBuf::from(default))
}

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

fn normalize_file(value: &str) -> Option<PathBuf> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let expanded = expand_tilde(trimmed);
    Some(normalize_path(PathBuf::from(expanded)))
}

fn normalize_path(path: PathBuf) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        normalized.push(component.as_os_str());
    }
    normalized
}

fn expand_tilde(value: &str) -> String {
    if (value == "~" || value.starts_with("~/"))
        && let Ok(home) = std::env::var("HOME")
    {
        let home = home.trim();
        if !home.is_empty() {
            if value == "~" {
                return home.to_string();
            }
            return format!("{}{}", home, &value[1..]);
        }
    }
    value.to_string()
}
