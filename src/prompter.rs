use anyhow::Result;
use rustyline::error::ReadlineError;
use std::io::{self, BufRead, Write};

/// Blocking line source for the menu loop. `Ok(None)` means the user is done
/// (end of input or Ctrl-C).
pub trait LineInput {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

pub struct EditorInput {
    editor: rustyline::DefaultEditor,
}

impl EditorInput {
    pub fn new() -> Result<Self> {
        Ok(Self {
            editor: rustyline::DefaultEditor::new()?,
        })
    }
}

impl LineInput for EditorInput {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    let _ = self.editor.add_history_entry(trimmed);
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

pub struct StdioInput;

impl StdioInput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdioInput {
    fn default() -> Self {
        Self::new()
    }
}

impl LineInput for StdioInput {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        print!("{prompt}");
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Re-asks while the answer is blank. The accepted line is returned as typed.
/// `Ok(None)` if input ended.
pub fn ask_text(input: &mut dyn LineInput, prompt: &str) -> Result<Option<String>> {
    loop {
        let Some(line) = input.read_line(prompt)? else {
            return Ok(None);
        };
        if !line.trim().is_empty() {
            return Ok(Some(line));
        }
        eprintln!("please input a non-empty value");
    }
}
