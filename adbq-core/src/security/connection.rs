//! Connection details assembled from the wallet and the prompted credentials.
//!
//! The connect string is the TNS alias; the Oracle client resolves it using
//! `tnsnames.ora` from the wallet directory, which also supplies the TLS
//! material. The password never appears in `Display` or `Debug` output.

use super::credentials::Credentials;
use crate::error::AdbqError;
use std::fmt;
use std::path::{Path, PathBuf};

/// Everything needed to open a pool: connect string, username and password.
///
/// # Example
/// ```rust
/// use adbq_core::security::{ConnectionDetails, Credentials};
///
/// let details = ConnectionDetails::new(
///     "adb_high",
///     "/opt/wallet",
///     Credentials::new("Admin".to_string(), "Welcome_1234".to_string()),
/// )?;
/// assert_eq!(details.connect_string(), "adb_high");
/// assert_eq!(details.url(), "adb_high?TNS_ADMIN=/opt/wallet");
/// assert!(!details.to_string().contains("Welcome_1234"));
/// # Ok::<(), adbq_core::AdbqError>(())
/// ```
#[derive(Clone)]
pub struct ConnectionDetails {
    tns_alias: String,
    wallet_dir: PathBuf,
    credentials: Credentials,
}

impl ConnectionDetails {
    /// Builds connection details, rejecting blank alias, username or password.
    ///
    /// # Errors
    /// Returns `AdbqError::InvalidInput` naming the first blank field.
    pub fn new(
        tns_alias: impl Into<String>,
        wallet_dir: impl Into<PathBuf>,
        credentials: Credentials,
    ) -> crate::Result<Self> {
        let tns_alias = tns_alias.into();
        if tns_alias.trim().is_empty() {
            return Err(AdbqError::invalid_input("TNS alias", "must not be blank"));
        }
        if credentials.username().trim().is_empty() {
            return Err(AdbqError::invalid_input("username", "must not be blank"));
        }
        if !credentials.has_password() {
            return Err(AdbqError::invalid_input("password", "must not be blank"));
        }

        Ok(Self {
            tns_alias,
            wallet_dir: wallet_dir.into(),
            credentials,
        })
    }

    /// Connect identifier handed to the driver.
    pub fn connect_string(&self) -> &str {
        &self.tns_alias
    }

    /// Directory the Oracle client reads `tnsnames.ora` and `sqlnet.ora` from.
    pub fn wallet_dir(&self) -> &Path {
        &self.wallet_dir
    }

    /// Database username.
    pub fn username(&self) -> &str {
        self.credentials.username()
    }

    pub(crate) fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Alias plus wallet location in `<alias>?TNS_ADMIN=<dir>` form, safe to log.
    pub fn url(&self) -> String {
        format!("{}?TNS_ADMIN={}", self.tns_alias, self.wallet_dir.display())
    }
}

impl fmt::Display for ConnectionDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ConnectionDetails[url={}, username={}, password=xxxxxx]",
            self.url(),
            self.username()
        )
    }
}

impl fmt::Debug for ConnectionDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
