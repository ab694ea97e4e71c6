//! Shell configuration
//!
//! Everything comes from command-line flags; nothing is read from disk.
//! Colors additionally depend on whether stdout is a terminal.

/// Default tracing filter for diagnostics on stderr
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Piggybank shell configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Style output with ANSI colors
    pub color: bool,
    /// Emit one JSON result per command instead of text
    pub json: bool,
    /// tracing filter directive (e.g. "warn", "piggybank_core=debug")
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: true,
            json: false,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Build the config from parsed flags
    ///
    /// Colors are enabled only when not disabled by `--no-color`, not in JSON
    /// mode, and stdout is a terminal.
    pub fn from_flags(no_color: bool, json: bool, log_level: Option<String>) -> Self {
        let defaults = Self::default();
        let color = defaults.color && !no_color && !json && atty::is(atty::Stream::Stdout);

        Self {
            color,
            json,
            log_level: log_level
                .filter(|level| !level.trim().is_empty())
                .unwrap_or(defaults.log_level),
        }
    }

    /// Plain text, no colors
    #[cfg(test)]
    pub fn plain() -> Self {
        Self {
            color: false,
            ..Self::default()
        }
    }
}
