use std::future::Future;
use std::pin::Pin;

use super::{Command, CommandOutcome};
use crate::connection::{Connection, RequestOptions};

/// Sends one question to one connection and prints the answer.
pub struct AskModelCommand {
    connection: Box<dyn Connection>,
    question: String,
    options: RequestOptions,
}

impl AskModelCommand {
    pub fn new(connection: Box<dyn Connection>, question: impl Into<String>) -> Self {
        Self {
            connection,
            question: question.into(),
            options: RequestOptions::new(),
        }
    }

    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    async fn run(&self) -> CommandOutcome {
        tracing::debug!(
            provider = self.connection.provider().as_str(),
            chars = self.question.chars().count(),
            "executing ask command"
        );
        let outcome = self.connection.ask(&self.question, &self.options).await;
        match &outcome {
            Ok(answer) => println!("Response: {answer}"),
            Err(err) => eprintln!("Error processing question: {err}"),
        }
        outcome
    }
}

impl Command for AskModelCommand {
    fn execute<'a>(&'a self) -> Pin<Box<dyn Future<Output = CommandOutcome> + Send + 'a>> {
        Box::pin(self.run())
    }
}
