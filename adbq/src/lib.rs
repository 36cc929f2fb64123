//! Library module for adbq
//!
//! Exposes the command line and the interactive collector so they can be
//! tested without a terminal. The binary glue is in main.rs.

pub mod collector;
pub mod prompt;

use adbq_core::{AdbqError, OutputFormat, PoolConfig};
use clap::{Args, Parser};
use collector::Presets;
use std::error::Error as _;
use std::time::Duration;

/// CLI argument structure
#[derive(Debug, Parser)]
#[command(name = "adbq")]
#[command(about = "Connect to an Autonomous Database with a wallet and list sample customers")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = "
adbq - Autonomous Database quickstart

Asks for a wallet directory, a TNS alias from its tnsnames.ora, a username
and a password, opens a small session pool and lists the first customers of
the SH sample schema.

Every flag is optional; anything not given on the command line or in the
environment is asked for interactively. The password is always prompted.

EXAMPLES:
  adbq
  adbq --wallet ~/Downloads/Wallet_adbquickstart --alias adbquickstart_low
  ADBQ_USERNAME=Admin adbq --format json
")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Wallet directory containing tnsnames.ora
    #[arg(long, env = "ADBQ_WALLET", value_name = "DIR")]
    pub wallet: Option<String>,

    /// TNS alias to connect to
    #[arg(long, env = "ADBQ_TNS_ALIAS", value_name = "ALIAS")]
    pub alias: Option<String>,

    /// Database username
    #[arg(long, env = "ADBQ_USERNAME", value_name = "NAME")]
    pub username: Option<String>,

    /// Sessions kept open by the pool
    #[arg(long, env = "ADBQ_POOL_MIN", default_value_t = 1)]
    pub pool_min: u32,

    /// Maximum sessions in the pool
    #[arg(long, env = "ADBQ_POOL_MAX", default_value_t = 5)]
    pub pool_max: u32,

    /// Seconds allowed for creating the pool and acquiring a session
    #[arg(long, value_name = "SECONDS", default_value_t = 30)]
    pub connect_timeout: u64,

    /// Seconds allowed for each round trip of the query
    #[arg(long, value_name = "SECONDS", default_value_t = 30)]
    pub query_timeout: u64,

    /// Result output: table (through the log) or json (stdout)
    #[arg(long, value_name = "FORMAT", default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Increase verbosity
    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        help = "Increase verbosity (-v, -vv)"
    )]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, help = "Suppress all log output except errors")]
    pub quiet: bool,
}

impl Cli {
    /// Pool settings from the command line, on top of the defaults.
    pub fn pool_config(&self) -> PoolConfig {
        PoolConfig::default()
            .with_min_size(self.pool_min)
            .with_max_size(self.pool_max)
            .with_connect_timeout(Duration::from_secs(self.connect_timeout))
            .with_query_timeout(Duration::from_secs(self.query_timeout))
    }

    /// Answers that skip their interactive prompt.
    pub fn presets(&self) -> Presets {
        Presets {
            wallet: self.wallet.clone(),
            tns_alias: self.alias.clone(),
            username: self.username.clone(),
        }
    }
}

/// Log lines for a failed run: the error itself, then one line per cause.
pub fn failure_messages(e: &AdbqError) -> Vec<String> {
    std::iter::once(format!("Failed to connect and execute query: {}", e))
        .chain(
            std::iter::successors(e.source(), |&cause| cause.source())
                .map(|cause| format!("  caused by: {}", cause)),
        )
        .collect()
}
