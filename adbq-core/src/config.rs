//! Session pool configuration.
//!
//! # Security
//! This struct intentionally does NOT store passwords or credentials; those
//! travel in [`crate::security::ConnectionDetails`].

use std::time::Duration;

/// Pool label used in log and error messages.
pub const DEFAULT_POOL_NAME: &str = "JDBC_UCP_POOL";

/// Upper bound on `max_size` accepted by [`PoolConfig::validate`].
pub const MAX_POOL_SIZE: u32 = 100;

/// Sizing and timeouts for the session pool.
///
/// # Example
/// ```rust
/// use adbq_core::config::PoolConfig;
/// use std::time::Duration;
///
/// let config = PoolConfig::default()
///     .with_max_size(8)
///     .with_connect_timeout(Duration::from_secs(10));
///
/// assert_eq!(config.min_size, 1);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    /// Pool label for log and error messages
    pub pool_name: String,
    /// Sessions opened when the pool is created and kept open afterwards
    pub min_size: u32,
    /// Hard cap on open sessions
    pub max_size: u32,
    /// Time allowed for pool creation plus session acquisition
    pub connect_timeout: Duration,
    /// Round-trip timeout for each driver call while querying
    pub query_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            pool_name: DEFAULT_POOL_NAME.to_string(),
            min_size: 1,
            max_size: 5,
            connect_timeout: Duration::from_secs(30),
            query_timeout: Duration::from_secs(30),
        }
    }
}

impl std::fmt::Display for PoolConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PoolConfig({}, min={}, max={})",
            self.pool_name, self.min_size, self.max_size
        )
    }
}

impl PoolConfig {
    /// Validates pool parameters.
    ///
    /// # Errors
    /// Returns a configuration error if sizes are inconsistent or a timeout is zero
    pub fn validate(&self) -> crate::Result<()> {
        if self.pool_name.trim().is_empty() {
            return Err(crate::error::AdbqError::configuration(
                "pool_name cannot be empty",
            ));
        }

        if self.max_size == 0 {
            return Err(crate::error::AdbqError::configuration(
                "max_size must be greater than 0",
            ));
        }

        if self.max_size > MAX_POOL_SIZE {
            return Err(crate::error::AdbqError::configuration(format!(
                "max_size should not exceed {}",
                MAX_POOL_SIZE
            )));
        }

        if self.min_size > self.max_size {
            return Err(crate::error::AdbqError::configuration(format!(
                "min_size ({}) cannot exceed max_size ({})",
                self.min_size, self.max_size
            )));
        }

        if self.connect_timeout.is_zero() {
            return Err(crate::error::AdbqError::configuration(
                "connect_timeout must be greater than 0",
            ));
        }

        if self.query_timeout.is_zero() {
            return Err(crate::error::AdbqError::configuration(
                "query_timeout must be greater than 0",
            ));
        }

        Ok(())
    }

    /// Builder method to set the minimum pool size.
    pub fn with_min_size(mut self, min_size: u32) -> Self {
        self.min_size = min_size;
        self
    }

    /// Builder method to set the maximum pool size.
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    /// Builder method to set the connect timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Builder method to set the query timeout.
    pub fn with_query_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout = timeout;
        self
    }
}
