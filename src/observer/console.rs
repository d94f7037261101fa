use anyhow::Result;

use super::{Observer, ResponseRecord};

pub struct ConsoleObserver;

impl Observer for ConsoleObserver {
    fn name(&self) -> &'static str {
        "console"
    }

    fn update(&self, record: &ResponseRecord) -> Result<()> {
        println!("{}", render(record));
        Ok(())
    }
}

pub(crate) fn render(record: &ResponseRecord) -> String {
    format!(
        "\n=== New Response Received ===\nModel: {}\nTime: {}\nQuestion: {}\nResponse: {}\n{}",
        record.model,
        record.timestamp,
        record.question,
        record.response,
        "=".repeat(30)
    )
}
