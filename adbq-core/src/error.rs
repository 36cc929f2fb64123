//! Error types with credential sanitization.
//!
//! No variant stores the password. Connection and query failures keep the
//! driver error as their `source` so the chain can be logged.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for adbq operations.
#[derive(Debug, Error)]
pub enum AdbqError {
    /// Wallet path does not point at a directory
    #[error(
        "Invalid wallet directory. The provided path is not a directory: {}",
        .path.display()
    )]
    InvalidWalletDirectory { path: PathBuf },

    /// Wallet directory has no `tnsnames.ora`
    #[error(
        "Invalid wallet directory. The provided directory does not contain the 'tnsnames.ora' file: {}",
        .path.display()
    )]
    MissingTnsNames { path: PathBuf },

    /// `tnsnames.ora` exists but no alias could be extracted
    #[error("The file {} does not contain TNS aliases", .path.display())]
    NoTnsAliases { path: PathBuf },

    /// Interactive input was missing or unusable
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    /// Configuration or validation error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Database connection failed (credentials sanitized)
    #[error("Database connection failed: {context}")]
    Connection {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Query preparation, execution or row fetch failed
    #[error("Query execution failed: {context}")]
    QueryExecution {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// I/O operation failed
    #[error("I/O operation failed: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results with AdbqError
pub type Result<T> = std::result::Result<T, AdbqError>;

impl AdbqError {
    /// Creates an invalid wallet directory error for `path`
    pub fn invalid_wallet(path: impl AsRef<Path>) -> Self {
        Self::InvalidWalletDirectory {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Creates an invalid input error for a prompted field
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Creates a connection error with context
    pub fn connection_failed<E>(context: impl Into<String>, error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Connection {
            context: context.into(),
            source: Box::new(error),
        }
    }

    /// Creates a query execution error with context
    pub fn query_failed<E>(context: impl Into<String>, error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::QueryExecution {
            context: context.into(),
            source: Box::new(error),
        }
    }

    /// Creates an I/O error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_error_messages() {
        let error = AdbqError::invalid_wallet("/tmp/nowhere");
        assert!(error.to_string().contains("not a directory"));
        assert!(error.to_string().contains("/tmp/nowhere"));

        let error = AdbqError::MissingTnsNames {
            path: PathBuf::from("/tmp/wallet"),
        };
        assert!(error.to_string().contains("'tnsnames.ora'"));

        let error = AdbqError::NoTnsAliases {
            path: PathBuf::from("/tmp/wallet/tnsnames.ora"),
        };
        assert_eq!(
            error.to_string(),
            "The file /tmp/wallet/tnsnames.ora does not contain TNS aliases"
        );
    }

    #[test]
    fn test_error_creation() {
        let error = AdbqError::configuration("max pool size must be greater than 0");
        assert!(error.to_string().contains("max pool size"));

        let error = AdbqError::invalid_input("password", "must not be blank");
        assert_eq!(
            error.to_string(),
            "Invalid input for password: must not be blank"
        );
    }

    #[test]
    fn test_error_source_is_kept() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "listener did not answer");
        let error = AdbqError::connection_failed("Pool creation failed", io);
        assert!(error.source().is_some());
        assert_eq!(
            error.to_string(),
            "Database connection failed: Pool creation failed"
        );
    }
}
