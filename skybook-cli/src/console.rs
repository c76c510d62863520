use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::{SessionError, SessionResult};

/// Line-oriented prompt I/O over any reader/writer pair.
///
/// Every prompt consumes exactly one input line. End of input surfaces as
/// [`SessionError::EndOfInput`].
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, message: impl Display) -> SessionResult<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Full line, surrounding whitespace trimmed. May be empty.
    pub fn read_line(&mut self, label: &str) -> SessionResult<String> {
        self.prompt(label)
    }

    /// First whitespace-delimited word of the line; reprompts on a blank line.
    pub fn read_token(&mut self, label: &str) -> SessionResult<String> {
        loop {
            let line = self.prompt(label)?;
            if let Some(token) = line.split_whitespace().next() {
                return Ok(token.to_string());
            }
        }
    }

    /// Parsed number; reprompts until the line parses.
    pub fn read_number<T: FromStr>(&mut self, label: &str) -> SessionResult<T> {
        loop {
            let line = self.prompt(label)?;
            match line.parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    tracing::debug!(input = %line, "Rejected non-numeric input");
                    self.say("Please enter a valid number.")?;
                }
            }
        }
    }

    pub fn read_choice(&mut self) -> SessionResult<u32> {
        self.read_number("Enter your choice: ")
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, label: &str) -> SessionResult<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::EndOfInput);
        }
        Ok(line.trim().to_string())
    }
}
