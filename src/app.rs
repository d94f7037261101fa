use anyhow::{Result, anyhow};
use std::sync::Arc;

use crate::cli::Cli;
use crate::command::{AskModelCommand, CommandInvoker};
use crate::config::AppConfig;
use crate::connection::{ConnectionFactory, ConnectionSource, RequestOptions};
use crate::error::{ConfigError, ConnectionError};
use crate::evaluation::{EvaluationReport, ResponseEvaluator};
use crate::interactive;
use crate::model::ProviderKind;
use crate::observer::{ConsoleObserver, FileObserver, LogObserver, ResponseSubject};
use crate::session::LastResponses;

pub async fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::from_cli(&cli);
    let mut app = App::from_config(&config)?;
    interactive::run_interactive(&mut app).await
}

#[derive(Debug)]
pub enum AskOutcome {
    Answered {
        response: String,
        failed_observers: Vec<&'static str>,
    },
    Failed(ConnectionError),
}

#[derive(Debug)]
pub enum CompareOutcome {
    NotEnough { cached: usize },
    Compared(EvaluationReport),
}

/// One interactive session: connections, notification fan-out, and the
/// last answer from each vendor.
pub struct App {
    connections: Box<dyn ConnectionSource>,
    invoker: CommandInvoker,
    evaluator: ResponseEvaluator,
    subject: ResponseSubject,
    last_responses: LastResponses,
    request_options: RequestOptions,
}

impl App {
    pub fn new(
        connections: Box<dyn ConnectionSource>,
        subject: ResponseSubject,
        request_options: RequestOptions,
    ) -> Self {
        Self {
            connections,
            invoker: CommandInvoker::new(),
            evaluator: ResponseEvaluator::with_default_strategies(),
            subject,
            last_responses: LastResponses::new(),
            request_options,
        }
    }

    /// Console, JSON file and log file observers, in that order.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let file_observer = FileObserver::new(&config.responses_path);
        let log_observer = LogObserver::new(&config.log_path)?;
        tracing::info!(
            responses = %file_observer.path().display(),
            log = %log_observer.path().display(),
            "persisting answers"
        );

        let mut subject = ResponseSubject::new();
        subject.attach(Arc::new(ConsoleObserver));
        subject.attach(Arc::new(file_observer));
        subject.attach(Arc::new(log_observer));

        Ok(Self::new(
            Box::new(ConnectionFactory::from_config(config)),
            subject,
            config.request_options.clone(),
        ))
    }

    pub fn last_responses(&self) -> &LastResponses {
        &self.last_responses
    }

    pub fn check_credential(&self, provider: ProviderKind) -> Result<(), ConfigError> {
        if self.connections.has_credential(provider) {
            Ok(())
        } else {
            Err(ConfigError::MissingCredential {
                provider: provider.display_name(),
                env: provider.key_env(),
            })
        }
    }

    /// Asks `provider` once. The answer is printed by the command, cached,
    /// and pushed to the observers; a failed exchange changes nothing.
    pub async fn ask(&mut self, provider: ProviderKind, question: &str) -> Result<AskOutcome> {
        let connection = self.connections.connect(provider)?;
        tracing::info!(
            provider = provider.as_str(),
            model = connection.model_name(),
            "asking question"
        );
        let command =
            AskModelCommand::new(connection, question).with_options(self.request_options.clone());
        self.invoker.set_command(Box::new(command));

        let outcome = self
            .invoker
            .execute_command()
            .await
            .ok_or_else(|| anyhow!("no command to execute"))?;
        let response = match outcome {
            Ok(response) => response,
            Err(err) => return Ok(AskOutcome::Failed(err)),
        };

        self.last_responses.record(provider, response.clone());
        let failed_observers = self
            .subject
            .set_response(provider.as_str(), question, &response);
        Ok(AskOutcome::Answered {
            response,
            failed_observers,
        })
    }

    pub fn compare(&self) -> CompareOutcome {
        match self.last_responses.pair() {
            Some((first, second)) => {
                CompareOutcome::Compared(self.evaluator.evaluate_all(first, second))
            }
            None => CompareOutcome::NotEnough {
                cached: self.last_responses.len(),
            },
        }
    }
}
