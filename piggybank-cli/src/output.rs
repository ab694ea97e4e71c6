//! Output formatting utilities

use std::io::{self, Write};

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use piggybank_core::{Error, OperationResult, Receipt};
use serde::Serialize;

/// Message shown for amounts that fail validation
pub const INVALID_INPUT: &str = "Invalid input! Please enter a valid number.";
/// Message shown when a withdrawal exceeds the balance
pub const INSUFFICIENT_FUNDS: &str = "Insufficient funds!";
/// Message shown for commands the shell does not know
pub const UNKNOWN_OPTION: &str = "Unknown option. Type 'help' to see available commands.";
/// Message shown when the shell ends
pub const FAREWELL: &str = "Exiting... Goodbye!";

/// Writes shell output either as styled text or as JSON lines
pub struct Output<W> {
    writer: W,
    color: bool,
    json: bool,
}

impl<W: Write> Output<W> {
    pub fn new(writer: W, color: bool, json: bool) -> Self {
        Self { writer, color, json }
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Print a success message
    pub fn success(&mut self, msg: &str) -> io::Result<()> {
        let line = if self.color { msg.green().to_string() } else { msg.to_string() };
        writeln!(self.writer, "{}", line)
    }

    /// Print an error message
    pub fn error(&mut self, msg: &str) -> io::Result<()> {
        let line = if self.color { msg.red().to_string() } else { msg.to_string() };
        writeln!(self.writer, "{}", line)
    }

    /// Print a warning message
    pub fn warning(&mut self, msg: &str) -> io::Result<()> {
        let line = if self.color { msg.yellow().to_string() } else { msg.to_string() };
        writeln!(self.writer, "{}", line)
    }

    /// Print an info message
    pub fn info(&mut self, msg: &str) -> io::Result<()> {
        let line = if self.color { msg.cyan().to_string() } else { msg.to_string() };
        writeln!(self.writer, "{}", line)
    }

    /// Print an unstyled line
    pub fn plain(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", msg)
    }

    /// Print a prompt without a trailing newline (text mode only)
    pub fn prompt(&mut self, msg: &str) -> io::Result<()> {
        if self.json {
            return Ok(());
        }
        write!(self.writer, "{}", msg)?;
        self.writer.flush()
    }

    /// Report the outcome of a balance command
    pub fn report(&mut self, result: piggybank_core::Result<Receipt>) -> io::Result<()> {
        if self.json {
            return self.json_line(&OperationResult::from(result));
        }

        match result {
            Ok(receipt) => {
                if let Some(amount) = receipt.amount {
                    let verb = match receipt.action {
                        piggybank_core::Action::Withdraw => "Withdrawn",
                        _ => "Deposited",
                    };
                    self.success(&format!("{}: {}", verb, amount))?;
                }
                self.info(&format!("Current balance: {}", receipt.balance))
            }
            Err(Error::InvalidAmount(_)) => self.error(INVALID_INPUT),
            Err(Error::InsufficientFunds) => self.warning(INSUFFICIENT_FUNDS),
        }
    }

    /// Report a command the shell does not recognize
    pub fn unknown_option(&mut self) -> io::Result<()> {
        if self.json {
            let result: OperationResult<Receipt> =
                OperationResult::fail_with_kind(UNKNOWN_OPTION, "unknown_option");
            return self.json_line(&result);
        }
        self.error(UNKNOWN_OPTION)
    }

    /// Print a table (text mode only)
    pub fn table(&mut self, table: &Table) -> io::Result<()> {
        if self.json {
            return Ok(());
        }
        writeln!(self.writer, "{}", table)
    }

    /// Print the farewell line (text mode only)
    ///
    /// `fresh_line` starts it on a new line, for when a prompt is still open.
    pub fn farewell(&mut self, fresh_line: bool) -> io::Result<()> {
        if self.json {
            return self.writer.flush();
        }
        if fresh_line {
            writeln!(self.writer)?;
        }
        writeln!(self.writer, "{}", FAREWELL)?;
        self.writer.flush()
    }

    fn json_line<T: Serialize>(&mut self, value: &T) -> io::Result<()> {
        let line = serde_json::to_string(value)?;
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}
