//! Shell command implementations

pub mod balance;
pub mod deposit;
pub mod help;
pub mod withdraw;

/// Commands understood by the shell, with their help text
pub const COMMANDS: &[(&str, &str)] = &[
    ("d", "Deposit money"),
    ("w", "Withdraw money"),
    ("b", "Check current balance"),
    ("help", "Show this list"),
    ("exit, q, quit", "Quit the program"),
];

/// A parsed command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Deposit,
    Withdraw,
    Balance,
    Help,
    Exit,
    /// Blank line
    Empty,
    Unknown,
}

impl Command {
    /// Parse a command line (trimmed, case-insensitive)
    pub fn parse(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            "" => Command::Empty,
            "d" => Command::Deposit,
            "w" => Command::Withdraw,
            "b" => Command::Balance,
            "help" => Command::Help,
            "exit" | "q" | "quit" => Command::Exit,
            _ => Command::Unknown,
        }
    }

    /// Name used in log events
    pub fn name(&self) -> &'static str {
        match self {
            Command::Deposit => "deposit",
            Command::Withdraw => "withdraw",
            Command::Balance => "balance",
            Command::Help => "help",
            Command::Exit => "exit",
            Command::Empty => "empty",
            Command::Unknown => "unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("d"), Command::Deposit);
        assert_eq!(Command::parse(" W \n"), Command::Withdraw);
        assert_eq!(Command::parse("B"), Command::Balance);
        assert_eq!(Command::parse("help"), Command::Help);
        assert_eq!(Command::parse(""), Command::Empty);
        assert_eq!(Command::parse("deposit"), Command::Unknown);
    }

    #[test]
    fn test_exit_aliases() {
        for alias in ["exit", "q", "quit", "QUIT", " Exit "] {
            assert_eq!(Command::parse(alias), Command::Exit, "alias {:?}", alias);
        }
    }
}
