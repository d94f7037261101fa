use super::{Command, CommandOutcome};

/// Holds at most one pending command.
#[derive(Default)]
pub struct CommandInvoker {
    command: Option<Box<dyn Command>>,
}

impl CommandInvoker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_command(&mut self, command: Box<dyn Command>) {
        self.command = Some(command);
    }

    /// `None` when no command has been set.
    pub async fn execute_command(&self) -> Option<CommandOutcome> {
        match &self.command {
            Some(command) => Some(command.execute().await),
            None => None,
        }
    }
}
