mod ask;
mod invoker;

use std::future::Future;
use std::pin::Pin;

use crate::error::ConnectionError;

pub use ask::AskModelCommand;
pub use invoker::CommandInvoker;

/// What a command produced. The command has already reported it to the user.
pub type CommandOutcome = Result<String, ConnectionError>;

pub trait Command: Send + Sync {
    /// Runs the command to completion. Implementations report failures
    /// themselves and never panic.
    fn execute<'a>(&'a self) -> Pin<Box<dyn Future<Output = CommandOutcome> + Send + 'a>>;
}
