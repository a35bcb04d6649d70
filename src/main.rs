//! Contact Assistant - Main entry point
//!
//! Runs the interactive address-book shell over stdin/stdout.

use anyhow::Result;
use contact_assistant::{run_shell, AddressBook, Config};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize logging (stderr only; stdout belongs to the shell)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Starting assistant bot");

    let mut book = AddressBook::new();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_shell(&mut book, stdin.lock(), stdout.lock())?;

    info!("Assistant bot shutdown complete");
    Ok(())
}
