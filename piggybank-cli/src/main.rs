//! Piggybank CLI - a single in-memory balance in your terminal

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

mod commands;
mod config;
mod logging;
mod output;
mod shell;

use config::Config;
use output::Output;
use shell::Shell;

/// Piggybank - deposit, withdraw and check a balance interactively
#[derive(Parser)]
#[command(name = "piggy", version, about, long_about = None)]
struct Cli {
    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Output one JSON result per command
    #[arg(long)]
    json: bool,

    /// Diagnostic log filter written to stderr (e.g. "debug")
    #[arg(long)]
    log_level: Option<String>,
}

/// How the session ended
enum Ending {
    Finished(Result<()>),
    Interrupted,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::from_flags(cli.no_color, cli.json, cli.log_level);

    logging::init(&config.log_level);

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: Config) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start runtime")?;

    let json = config.json;
    let ending = runtime.block_on(session(config));

    // The blocking reader may still be parked on stdin after an interrupt
    runtime.shutdown_background();

    finish(ending, json, io::stdout().lock())
}

/// Turn the session ending into the process result
///
/// An interrupt leaves the menu prompt open, so the farewell starts on a
/// fresh line.
fn finish<W: Write>(ending: Ending, json: bool, writer: W) -> Result<()> {
    match ending {
        Ending::Finished(result) => result,
        Ending::Interrupted => {
            tracing::info!("interrupted");
            Output::new(writer, false, json)
                .farewell(true)
                .context("Failed to write output")
        }
    }
}

/// Run the shell on a blocking thread, racing it against Ctrl-C
async fn session(config: Config) -> Ending {
    let interrupt = interrupt();
    tokio::pin!(interrupt);

    // Install the Ctrl-C handler before the shell prints anything
    tokio::select! {
        biased;
        _ = &mut interrupt => return Ending::Interrupted,
        _ = std::future::ready(()) => {}
    }

    let shell = tokio::task::spawn_blocking(move || {
        let mut shell = Shell::new(io::stdin().lock(), io::stdout(), &config);
        shell.run()
    });

    tokio::select! {
        joined = shell => {
            Ending::Finished(joined.context("Shell task failed").and_then(|result| result))
        }
        _ = &mut interrupt => Ending::Interrupted,
    }
}

/// Resolves on Ctrl-C; never resolves if the handler cannot be installed
async fn interrupt() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupt_prints_farewell_on_fresh_line() {
        let mut out = Vec::new();
        finish(Ending::Interrupted, false, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\nExiting... Goodbye!\n");
    }

    #[test]
    fn test_interrupt_in_json_mode_prints_nothing() {
        let mut out = Vec::new();
        finish(Ending::Interrupted, true, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_finished_session_keeps_its_result() {
        let mut out = Vec::new();
        assert!(finish(Ending::Finished(Ok(())), false, &mut out).is_ok());
        let failed = Ending::Finished(Err(anyhow::anyhow!("stdout closed")));
        assert!(finish(failed, false, &mut out).is_err());
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_interrupt_handler_installs() {
        let interrupt = interrupt();
        tokio::pin!(interrupt);
        let polled = tokio::time::timeout(std::time::Duration::from_millis(10), &mut interrupt).await;
        assert!(polled.is_err(), "no Ctrl-C was sent");
    }
}
