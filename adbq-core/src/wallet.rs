//! Wallet directory inspection and TNS alias extraction.
//!
//! An Autonomous Database wallet is a directory holding `tnsnames.ora`,
//! `sqlnet.ora` and the TLS key material. Each `tnsnames.ora` line maps one
//! alias to its full connection descriptor:
//!
//! ```text
//! adb_high = (description= (retry_count=20)(address=(protocol=tcps)...))
//! adb_low = (description= ...)
//! ```

use crate::error::AdbqError;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};
use tracing::debug;

/// Directory name offered as the default when it exists in the working directory.
pub const DEFAULT_WALLET_DIR: &str = "wallet";

/// File inside the wallet listing the TNS aliases.
pub const TNSNAMES_FILE: &str = "tnsnames.ora";

/// Replaces a leading `~` followed by the path separator with `home`.
///
/// Anything else, including a bare `~` or `~user/...`, is returned unchanged.
///
/// # Example
/// ```rust
/// use adbq_core::wallet::expand_home;
/// use std::path::{Path, PathBuf};
///
/// let home = Path::new("/home/u");
/// assert_eq!(expand_home("~/x", Some(home)), PathBuf::from("/home/u/x"));
/// assert_eq!(expand_home("/opt/wallet", Some(home)), PathBuf::from("/opt/wallet"));
/// ```
pub fn expand_home(input: &str, home: Option<&Path>) -> PathBuf {
    let prefix = format!("~{}", MAIN_SEPARATOR);
    match (input.strip_prefix(&prefix), home) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(input),
    }
}

/// Extracts TNS aliases from `tnsnames.ora` content, in file order.
///
/// Every line containing `=` contributes the text before its first `=`,
/// trimmed. Comment lines (first non-blank character `#`) and lines with
/// nothing before the `=` are skipped.
pub fn parse_tns_aliases(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(alias, _)| alias.trim())
        .filter(|alias| !alias.is_empty())
        .map(str::to_string)
        .collect()
}

/// A validated wallet directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wallet {
    dir: PathBuf,
}

impl Wallet {
    /// Opens a wallet, rejecting anything that is not a directory.
    ///
    /// The stored path is absolute so that it stays valid for the Oracle
    /// client regardless of its own working directory.
    ///
    /// # Errors
    /// Returns `AdbqError::InvalidWalletDirectory` if `path` is not a directory,
    /// or `AdbqError::Io` if the absolute path cannot be computed.
    pub fn open(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        if !path.is_dir() {
            return Err(AdbqError::invalid_wallet(path));
        }

        let dir = std::path::absolute(path).map_err(|e| {
            AdbqError::io(
                format!("Failed to resolve absolute path of {}", path.display()),
                e,
            )
        })?;

        debug!("Using wallet directory {}", dir.display());
        Ok(Self { dir })
    }

    /// Absolute wallet directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Location of `tnsnames.ora` inside the wallet.
    pub fn tnsnames_path(&self) -> PathBuf {
        self.dir.join(TNSNAMES_FILE)
    }

    /// Reads the TNS aliases declared in the wallet.
    ///
    /// # Errors
    /// - `MissingTnsNames` if `tnsnames.ora` is not a regular file
    /// - `NoTnsAliases` if the file declares no alias
    /// - `Io` if the file cannot be read
    pub fn aliases(&self) -> crate::Result<Vec<String>> {
        let tnsnames = self.tnsnames_path();
        if !tnsnames.is_file() {
            return Err(AdbqError::MissingTnsNames {
                path: self.dir.clone(),
            });
        }

        let content = std::fs::read_to_string(&tnsnames)
            .map_err(|e| AdbqError::io(format!("Failed to read {}", tnsnames.display()), e))?;

        let aliases = parse_tns_aliases(&content);
        if aliases.is_empty() {
            return Err(AdbqError::NoTnsAliases { path: tnsnames });
        }

        debug!("Found {} TNS aliases in {}", aliases.len(), tnsnames.display());
        Ok(aliases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tns_aliases_order() {
        assert_eq!(parse_tns_aliases("A=x\nB=y\n"), vec!["A", "B"]);
    }

    #[test]
    fn test_parse_tns_aliases_splits_on_first_equals() {
        let content = "adb_high = (description=(address=(protocol=tcps)(port=1522)))\n";
        assert_eq!(parse_tns_aliases(content), vec!["adb_high"]);
    }

    #[test]
    fn test_parse_tns_aliases_skips_noise() {
        let content = "\n# adb_old = (description=...)\n   \nadb_tp=(x)\n=orphan\nno equals here\r\nadb_low =(y)\r\n";
        assert_eq!(parse_tns_aliases(content), vec!["adb_tp", "adb_low"]);
    }

    #[test]
    fn test_parse_tns_aliases_empty() {
        assert!(parse_tns_aliases("").is_empty());
        assert!(parse_tns_aliases("nothing to see\n").is_empty());
    }

    #[test]
    #[cfg(unix)]
    fn test_expand_home() {
        let home = Path::new("/home/u");
        assert_eq!(expand_home("~/x", Some(home)), PathBuf::from("/home/u/x"));
        assert_eq!(
            expand_home("~/a/b/wallet", Some(home)),
            PathBuf::from("/home/u/a/b/wallet")
        );
    }

    #[test]
    #[cfg(unix)]
    fn test_expand_home_leaves_other_paths() {
        let home = Path::new("/home/u");
        assert_eq!(expand_home("~", Some(home)), PathBuf::from("~"));
        assert_eq!(expand_home("~bob/x", Some(home)), PathBuf::from("~bob/x"));
        assert_eq!(expand_home("wallet", Some(home)), PathBuf::from("wallet"));
        assert_eq!(expand_home("/x/~/y", Some(home)), PathBuf::from("/x/~/y"));
    }

    #[test]
    #[cfg(unix)]
    fn test_expand_home_without_home() {
        assert_eq!(expand_home("~/x", None), PathBuf::from("~/x"));
    }

    #[test]
    fn test_open_rejects_missing_path() {
        let err = Wallet::open("/definitely/not/a/wallet/dir").unwrap_err();
        assert!(matches!(err, AdbqError::InvalidWalletDirectory { .. }));
    }
}
