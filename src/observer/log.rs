use anyhow::{Context, Result, anyhow};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::time::log_stamp;
use super::{Observer, ResponseRecord};
use crate::paths;

/// Append-only `<timestamp> - <message>` line writer.
pub struct LineLogger {
    path: PathBuf,
    file: Mutex<File>,
}

impl LineLogger {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        paths::ensure_parent(&path)
            .with_context(|| format!("failed to create directory for: {}", path.display()))?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("failed to open log file: {}", path.display()))?;
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Embedded line breaks are escaped so every call stays one line.
    pub fn log(&self, message: &str) -> Result<()> {
        let line = format!(
            "{} - {}\n",
            log_stamp(),
            message.replace('\r', "\\r").replace('\n', "\\n")
        );
        let mut file = self
            .file
            .lock()
            .map_err(|_| anyhow!("log file lock poisoned: {}", self.path.display()))?;
        file.write_all(line.as_bytes())
            .and_then(|_| file.flush())
            .with_context(|| format!("failed to append to log file: {}", self.path.display()))
    }
}

pub struct LogObserver {
    logger: LineLogger,
}

impl LogObserver {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            logger: LineLogger::open(path)?,
        })
    }

    pub fn path(&self) -> &Path {
        self.logger.path()
    }
}

impl Observer for LogObserver {
    fn name(&self) -> &'static str {
        "log"
    }

    fn update(&self, record: &ResponseRecord) -> Result<()> {
        self.logger.log(&format!(
            "New response from model {}: Question: {} | Response: {}",
            record.model, record.question, record.response
        ))
    }
}
