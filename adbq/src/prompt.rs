//! Terminal input.
//!
//! Prompts go to stderr so that `--format json` output on stdout stays
//! machine-readable. Passwords are read without echo through `rpassword`.

use adbq_core::{AdbqError, Result};
use std::io::{self, BufRead, Write};

/// Source of interactive answers.
pub trait Prompter {
    /// Shows `prompt` and reads one line without its line ending.
    ///
    /// Returns `Ok(None)` when input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Shows `prompt` and reads a password without echoing it.
    fn read_password(&mut self, prompt: &str) -> Result<String>;
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        (**self).read_line(prompt)
    }

    fn read_password(&mut self, prompt: &str) -> Result<String> {
        (**self).read_password(prompt)
    }
}

/// Strips one trailing `\n` or `\r\n`.
pub fn trim_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

/// Prompter backed by stdin/stderr and the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    /// Creates a terminal prompter.
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for TerminalPrompter {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        let mut stderr = io::stderr().lock();
        write!(stderr, "{}", prompt)
            .and_then(|()| stderr.flush())
            .map_err(|e| AdbqError::io("Failed to write prompt", e))?;

        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| AdbqError::io("Failed to read from console", e))?;

        if read == 0 {
            return Ok(None);
        }
        Ok(Some(trim_line_ending(line)))
    }

    fn read_password(&mut self, prompt: &str) -> Result<String> {
        rpassword::prompt_password(prompt).map_err(|e| {
            AdbqError::invalid_input("password", format!("console is not available: {}", e))
        })
    }
}
