use anyhow::Result;
use std::io::{self, IsTerminal};

use crate::app::{App, AskOutcome};
use crate::model::ProviderKind;
use crate::output;
use crate::prompter::{self, EditorInput, LineInput, StdioInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Ask(ProviderKind),
    Compare,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Ask(ProviderKind::ChatGpt)),
            "2" => Some(MenuChoice::Ask(ProviderKind::Groq)),
            "3" => Some(MenuChoice::Compare),
            "4" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Line editor with history on a terminal, plain stdin otherwise.
pub async fn run_interactive(app: &mut App) -> Result<()> {
    let mut input: Box<dyn LineInput> = if io::stdin().is_terminal() && io::stdout().is_terminal()
    {
        Box::new(EditorInput::new()?)
    } else {
        Box::new(StdioInput::new())
    };
    run_menu(app, input.as_mut()).await
}

pub(crate) async fn run_menu(app: &mut App, input: &mut dyn LineInput) -> Result<()> {
    loop {
        output::print_menu();
        let Some(line) = input.read_line("Choose an option: ")? else {
            println!("Exiting...");
            break;
        };

        match MenuChoice::parse(&line) {
            Some(MenuChoice::Exit) => {
                println!("Exiting...");
                break;
            }
            Some(MenuChoice::Compare) => output::print_compare_outcome(&app.compare()),
            Some(MenuChoice::Ask(provider)) => {
                if let Err(err) = ask_provider(app, input, provider).await {
                    eprintln!("Error: {err:#}");
                }
            }
            None => println!("Invalid option!"),
        }
    }
    Ok(())
}

async fn ask_provider(
    app: &mut App,
    input: &mut dyn LineInput,
    provider: ProviderKind,
) -> Result<()> {
    app.check_credential(provider)?;
    let Some(question) = prompter::ask_text(input, "Enter your question: ")? else {
        return Ok(());
    };

    match app.ask(provider, &question).await? {
        AskOutcome::Answered {
            response,
            failed_observers,
        } => {
            tracing::debug!(
                provider = provider.as_str(),
                chars = response.chars().count(),
                "answer cached"
            );
            if !failed_observers.is_empty() {
                eprintln!(
                    "warning: answer was not recorded by: {}",
                    failed_observers.join(", ")
                );
            }
        }
        AskOutcome::Failed(err) => {
            tracing::debug!(provider = provider.as_str(), "no answer cached: {err}");
        }
    }
    Ok(())
}
