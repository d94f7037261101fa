mod console;
mod file;
mod log;
mod record;
mod time;

use anyhow::Result;
use std::sync::Arc;

pub use console::ConsoleObserver;
pub use file::FileObserver;
pub use log::LogObserver;
pub use record::ResponseRecord;

pub trait Observer: Send + Sync {
    fn name(&self) -> &'static str;

    fn update(&self, record: &ResponseRecord) -> Result<()>;
}

/// Fans each new record out to its observers, in attach order.
///
/// A failing observer is logged and reported back; the remaining observers
/// are still notified.
#[derive(Default)]
pub struct ResponseSubject {
    observers: Vec<Arc<dyn Observer>>,
    current: Option<ResponseRecord>,
}

impl ResponseSubject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaching the same instance twice is a no-op.
    pub fn attach(&mut self, observer: Arc<dyn Observer>) {
        if !self
            .observers
            .iter()
            .any(|existing| Arc::ptr_eq(existing, &observer))
        {
            self.observers.push(observer);
        }
    }

    /// Returns whether the instance was attached.
    pub fn detach(&mut self, observer: &Arc<dyn Observer>) -> bool {
        let before = self.observers.len();
        self.observers.retain(|existing| !Arc::ptr_eq(existing, observer));
        self.observers.len() != before
    }

    #[cfg(test)]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn current(&self) -> Option<&ResponseRecord> {
        self.current.as_ref()
    }

    /// Stamps and stores a new record, then notifies. Returns the names of
    /// observers that failed.
    pub fn set_response(
        &mut self,
        model: &str,
        question: &str,
        response: &str,
    ) -> Vec<&'static str> {
        self.current = Some(ResponseRecord::new(model, question, response));
        self.notify()
    }

    pub fn notify(&self) -> Vec<&'static str> {
        let Some(record) = self.current.as_ref() else {
            return Vec::new();
        };
        let mut failed = Vec::new();
        for observer in &self.observers {
            if let Err(err) = observer.update(record) {
                tracing::error!(observer = observer.name(), "failed to handle response: {err:#}");
                failed.push(observer.name());
            }
        }
        failed
    }
}
