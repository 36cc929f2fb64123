//! Core library for adbq, the Autonomous Database quickstart.
//!
//! Provides wallet inspection, credential handling and the pooled execution
//! of the customer query. The interactive prompts live in the `adbq` binary
//! crate; everything here is usable without a terminal.
//!
//! # Security Guarantees
//! - Passwords are held in zeroizing containers and wiped on drop
//! - Passwords never appear in `Display`, `Debug`, logs or error messages
//! - The fixed query is read-only
//!
//! # Flow
//! 1. [`wallet::Wallet`] validates the wallet directory and lists TNS aliases
//! 2. [`security::ConnectionDetails`] bundles alias, wallet and credentials
//! 3. [`runner::run`] opens the pool, queries one connection and releases it

pub mod config;
pub mod error;
pub mod logging;
pub mod query;
pub mod runner;
pub mod security;
pub mod wallet;

// Re-export commonly used types
pub use config::PoolConfig;
pub use error::{AdbqError, Result};
pub use logging::init_logging;
pub use query::{CustomerRow, OutputFormat, Report};
pub use security::{ConnectionDetails, Credentials};
pub use wallet::Wallet;
