//! Pool creation and execution of the customer query.
//!
//! The `oracle` driver is synchronous, so the whole pool/query sequence runs
//! on tokio's blocking pool and the async side only waits for it, bounded by
//! the configured timeouts. [`execute`] owns its runtime and shuts it down
//! without joining a driver call that outlived the deadline, so a stuck
//! connect cannot keep the process alive. The Oracle client is pointed at the wallet
//! directory before the pool is built; that is where it finds
//! `tnsnames.ora`, `sqlnet.ora` and the TLS material.

use crate::config::PoolConfig;
use crate::error::AdbqError;
use crate::query::{CUSTOMER_QUERY, CustomerRow, OutputFormat, Report};
use crate::security::ConnectionDetails;
use crate::Result;
use oracle::pool::{GetMode, Pool, PoolBuilder};
use oracle::{Connection, InitParams, Row};
use std::future::Future;
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Points the Oracle client at the wallet directory.
///
/// Client initialization happens once per process; later calls are no-ops
/// and keep the first configuration directory.
fn init_client(wallet_dir: &Path) -> Result<()> {
    let mut params = InitParams::new();
    params
        .oracle_client_config_dir(wallet_dir)
        .map_err(|e| AdbqError::connection_failed("Invalid Oracle client configuration", e))?;

    let initialized = params
        .init()
        .map_err(|e| AdbqError::connection_failed("Failed to initialize Oracle client", e))?;

    if !initialized {
        debug!("Oracle client already initialized, keeping its configuration directory");
    }

    Ok(())
}

/// Builds the session pool for `details`.
///
/// # Errors
/// Returns `AdbqError::Connection` if the client cannot be initialized or
/// the pool cannot open its initial sessions.
///
/// Acquiring a session from the pool waits at most `connect_timeout`.
pub fn open_pool(details: &ConnectionDetails, config: &PoolConfig) -> Result<Pool> {
    init_client(details.wallet_dir())?;

    debug!("Creating {}", config);
    PoolBuilder::new(
        details.username(),
        details.credentials().password(),
        details.connect_string(),
    )
    .min_connections(config.min_size)
    .max_connections(config.max_size)
    .get_mode(GetMode::TimedWait(config.connect_timeout))
    .build()
    .map_err(|e| {
        AdbqError::connection_failed(format!("Failed to create pool {}", config.pool_name), e)
    })
}

fn text_column(row: &Row, index: usize, name: &str) -> Result<Option<String>> {
    row.get::<usize, Option<String>>(index)
        .map_err(|e| AdbqError::query_failed(format!("Failed to read column {}", name), e))
}

/// Runs [`CUSTOMER_QUERY`] on `conn`.
///
/// Every round trip is bounded by `query_timeout`.
///
/// # Errors
/// Returns `AdbqError::QueryExecution` if the statement or a row fetch fails.
pub fn fetch_customers(conn: &Connection, query_timeout: Duration) -> Result<Vec<CustomerRow>> {
    conn.set_call_timeout(Some(query_timeout))
        .map_err(|e| AdbqError::query_failed("Failed to set call timeout", e))?;

    let rows = conn
        .query(CUSTOMER_QUERY, &[])
        .map_err(|e| AdbqError::query_failed("Failed to execute customer query", e))?;

    rows.map(|row| {
        let row = row.map_err(|e| AdbqError::query_failed("Failed to fetch row", e))?;
        Ok(CustomerRow {
            cust_id: text_column(&row, 0, "CUST_ID")?,
            first_name: text_column(&row, 1, "CUST_FIRST_NAME")?,
            last_name: text_column(&row, 2, "CUST_LAST_NAME")?,
            city: text_column(&row, 3, "CUST_CITY")?,
            credit_limit: text_column(&row, 4, "CUST_CREDIT_LIMIT")?,
        })
    })
    .collect()
}

fn run_blocking(details: &ConnectionDetails, config: &PoolConfig) -> Result<Report> {
    let pool = open_pool(details, config)?;
    let conn = pool
        .get()
        .map_err(|e| AdbqError::connection_failed("Failed to acquire pooled connection", e))?;

    info!("Listing 20 customers from the sample 'SH' schema");
    let rows = fetch_customers(&conn, config.query_timeout)?;
    debug!("Fetched {} rows", rows.len());

    // Dropping the connection hands the session back to the pool.
    drop(conn);
    Ok(Report::new(rows))
}

/// Runs blocking `work` on tokio's blocking pool and stops waiting for it
/// after `deadline`. The work itself is not interrupted.
async fn run_bounded<T, F>(deadline: Duration, work: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    let task = tokio::task::spawn_blocking(work);

    match tokio::time::timeout(deadline, task).await {
        Ok(Ok(result)) => result,
        Ok(Err(join_error)) => Err(AdbqError::connection_failed(
            "Database task did not complete",
            join_error,
        )),
        Err(elapsed) => Err(AdbqError::connection_failed(
            format!("No result within {:?}", deadline),
            elapsed,
        )),
    }
}

/// Drives `future` on a fresh runtime, then shuts the runtime down without
/// waiting for blocking tasks that are still running.
fn on_runtime<T>(future: impl Future<Output = Result<T>>) -> Result<T> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| AdbqError::io("Failed to start async runtime", e))?;

    let outcome = runtime.block_on(future);
    runtime.shutdown_background();
    outcome
}

/// Opens the pool, acquires one connection, runs the customer query and
/// releases the connection.
///
/// # Errors
/// - `Configuration` if `config` is invalid
/// - `Connection` if the pool or session cannot be obtained, or nothing
///   completes within `connect_timeout + query_timeout`
/// - `QueryExecution` if the query fails
pub async fn run(details: ConnectionDetails, config: PoolConfig) -> Result<Report> {
    config.validate()?;
    info!("Connecting to autonomous database: {}", details);

    let deadline = config.connect_timeout.saturating_add(config.query_timeout);
    run_bounded(deadline, move || run_blocking(&details, &config)).await
}

/// Blocking entry point for the binary: [`run`] on its own runtime.
///
/// Returns once the result is in or the deadline has passed, even if the
/// driver is still blocked in a network call.
///
/// # Errors
/// Same as [`run`], plus `Io` if the runtime cannot be started.
pub fn execute(details: ConnectionDetails, config: PoolConfig) -> Result<Report> {
    on_runtime(run(details, config))
}

/// Writes the report.
///
/// Table lines go through the log at `info`, except when `quiet` is set:
/// then they are written to `out` like JSON lines, so the result is never
/// filtered away with the log.
///
/// # Errors
/// Returns an error if JSON serialization or writing to `out` fails
pub fn emit(
    report: &Report,
    format: OutputFormat,
    quiet: bool,
    out: &mut impl Write,
) -> Result<()> {
    let lines = report.render(format)?;
    if format == OutputFormat::Table && !quiet {
        lines.iter().for_each(|line| info!("{}", line));
        return Ok(());
    }

    for line in &lines {
        writeln!(out, "{}", line).map_err(|e| AdbqError::io("Failed to write results", e))?;
    }
    out.flush()
        .map_err(|e| AdbqError::io("Failed to write results", e))
}
