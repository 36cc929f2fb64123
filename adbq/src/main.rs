//! Autonomous Database quickstart.
//!
//! Collects the wallet, alias and credentials interactively, then opens a
//! session pool and lists customers from the SH sample schema.
//!
//! # Security Guarantees
//! - The password is only read through a masked prompt
//! - No credentials are logged; connection details print `password=xxxxxx`

use adbq::{Cli, failure_messages};
use adbq::collector::CredentialCollector;
use adbq::prompt::TerminalPrompter;
use adbq_core::{AdbqError, Result, init_logging, runner};
use clap::Parser;
use std::io;
use tracing::error;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.global.verbose, cli.global.quiet)?;

    let config = cli.pool_config();
    config.validate()?;

    // Invalid input ends the program here with the error.
    let details = CredentialCollector::new(TerminalPrompter::new())
        .with_presets(cli.presets())
        .collect()?;

    let outcome = runner::execute(details, config).and_then(|report| {
        runner::emit(&report, cli.format, cli.global.quiet, &mut io::stdout().lock())
    });

    if let Err(e) = outcome {
        log_failure(&e);
    }

    Ok(())
}

/// Logs a connection or query failure with its cause chain.
fn log_failure(e: &AdbqError) {
    for message in failure_messages(e) {
        error!("{}", message);
    }
}
