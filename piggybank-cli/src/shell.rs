//! Interactive shell - reads commands and dispatches them to the account
//!
//! The shell owns the one [`Account`] for the session. It is generic over
//! its reader and writer so a whole session can be replayed from a string.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use piggybank_core::{Account, Receipt};

use crate::commands::{balance, deposit, help, withdraw, Command};
use crate::config::Config;
use crate::output::Output;

const BANNER: &str = "Piggybank. Type 'help' to see options.";
const MENU: &str = "Enter 'd' to deposit, 'w' to withdraw, 'b' to check balance, or 'exit' to quit: ";

/// What the loop does after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
    /// Input closed while the shell was waiting for a line
    EndOfInput,
}

pub struct Shell<R, W> {
    input: R,
    pub(crate) output: Output<W>,
    pub(crate) account: Account,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, writer: W, config: &Config) -> Self {
        Self {
            input,
            output: Output::new(writer, config.color, config.json),
            account: Account::new(),
        }
    }

    /// Run until an exit command or end of input
    pub fn run(&mut self) -> Result<()> {
        tracing::info!("shell started");

        if !self.output.is_json() {
            self.output.plain(BANNER)?;
            self.output.plain("")?;
        }

        loop {
            let flow = match self.read_line(MENU)? {
                Some(line) => self.dispatch(Command::parse(&line))?,
                None => Flow::EndOfInput,
            };

            match flow {
                Flow::Continue => {}
                Flow::Exit => {
                    self.output.farewell(false)?;
                    break;
                }
                Flow::EndOfInput => {
                    self.output.farewell(true)?;
                    break;
                }
            }
        }

        tracing::info!("shell finished");
        Ok(())
    }

    /// Prompt and read one trimmed line; `None` once input is closed
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than treated as a
    /// read failure, so a garbled line is just an unknown command or an
    /// invalid amount.
    pub(crate) fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.output.prompt(prompt).context("Failed to write prompt")?;

        let mut line = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    /// Report a command result, logging only the error kind
    pub(crate) fn report(&mut self, result: piggybank_core::Result<Receipt>) -> Result<()> {
        if let Err(e) = &result {
            tracing::info!(kind = e.kind(), "command rejected");
        }
        self.output.report(result).context("Failed to write output")
    }

    fn dispatch(&mut self, command: Command) -> Result<Flow> {
        tracing::debug!(command = command.name(), "dispatching");

        match command {
            Command::Deposit => deposit::run(self),
            Command::Withdraw => withdraw::run(self),
            Command::Balance => balance::run(self),
            Command::Help => help::run(self),
            Command::Exit => Ok(Flow::Exit),
            Command::Empty => Ok(Flow::Continue),
            Command::Unknown => {
                self.output.unknown_option()?;
                Ok(Flow::Continue)
            }
        }
    }

    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.output.into_inner()
    }
}
