//! # Console Input Abstraction
//!
//! Operations prompt for their fields one line at a time. The prompt goes
//! through [`InputSource`] so command code never touches the terminal:
//! [`StdinInput`] is the production source, tests script their own lines.

use std::io::{self, BufRead, Write};

use crate::error::Result;

/// One line of user input per call, in prompt/answer pairs.
pub trait InputSource {
    /// Show `prompt` and read one line, with the trailing newline and any
    /// surrounding whitespace removed.
    fn read_line(&mut self, prompt: &str) -> Result<String>;
}

/// Reads from stdin, writing prompts to stdout.
pub struct StdinInput;

impl InputSource for StdinInput {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed").into());
        }
        Ok(line.trim().to_string())
    }
}

#[cfg(test)]
pub(crate) struct ScriptedInput {
    lines: std::collections::VecDeque<String>,
}

#[cfg(test)]
impl ScriptedInput {
    pub(crate) fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
impl InputSource for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> Result<String> {
        self.lines.pop_front().map(|s| s.trim().to_string()).ok_or_else(|| {
            crate::error::StockError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input script exhausted",
            ))
        })
    }
}
