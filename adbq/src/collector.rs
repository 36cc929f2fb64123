//! Interactive collection of the connection details.
//!
//! Four questions, asked in order: wallet directory, TNS alias, username,
//! password. Any of the first three can be answered up front (command line
//! or environment), in which case its prompt is skipped. Every failure here
//! is fatal for the program.

use crate::prompt::Prompter;
use adbq_core::wallet::{DEFAULT_WALLET_DIR, Wallet, expand_home};
use adbq_core::{AdbqError, ConnectionDetails, Credentials, Result};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Username offered when the prompt is left blank.
pub const DEFAULT_USERNAME: &str = "Admin";

/// Answers supplied before any prompt is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Presets {
    pub wallet: Option<String>,
    pub tns_alias: Option<String>,
    pub username: Option<String>,
}

/// Returns the trimmed input, or `default` when the input is absent or blank.
pub fn default_if_blank(input: Option<String>, default: &str) -> String {
    match input {
        Some(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => default.to_string(),
    }
}

/// Walks the user through the prompts and assembles [`ConnectionDetails`].
pub struct CredentialCollector<P> {
    prompter: P,
    home_dir: Option<PathBuf>,
    default_wallet: PathBuf,
    presets: Presets,
}

impl<P: Prompter> CredentialCollector<P> {
    /// Collector using the user's home directory and `./wallet` as default.
    pub fn new(prompter: P) -> Self {
        Self {
            prompter,
            home_dir: dirs::home_dir(),
            default_wallet: PathBuf::from(DEFAULT_WALLET_DIR),
            presets: Presets::default(),
        }
    }

    /// Overrides the directory `~/` expands to.
    pub fn with_home_dir(mut self, home_dir: Option<PathBuf>) -> Self {
        self.home_dir = home_dir;
        self
    }

    /// Overrides the wallet offered as default when it exists.
    pub fn with_default_wallet(mut self, default_wallet: impl Into<PathBuf>) -> Self {
        self.default_wallet = default_wallet.into();
        self
    }

    /// Pre-answers some of the questions.
    pub fn with_presets(mut self, presets: Presets) -> Self {
        self.presets = presets;
        self
    }

    fn ask(&mut self, preset: Option<String>, prompt: &str) -> Result<Option<String>> {
        match preset {
            Some(value) => {
                debug!("Using preset answer for '{}'", prompt.trim_end());
                Ok(Some(value))
            }
            None => self.prompter.read_line(prompt),
        }
    }

    /// Asks for the wallet directory and validates it.
    ///
    /// # Errors
    /// `InvalidWalletDirectory` if the answer is missing (with no default
    /// available) or does not name a directory.
    pub fn read_wallet(&mut self) -> Result<Wallet> {
        let has_default = self.default_wallet.is_dir();
        let prompt = if has_default {
            format!("Wallet directory [{}]: ", self.default_wallet.display())
        } else {
            "Wallet directory: ".to_string()
        };

        let preset = self.presets.wallet.take();
        let path = match self.ask(preset, &prompt)? {
            Some(input) if !input.trim().is_empty() => {
                expand_home(&input, self.home_dir.as_deref())
            }
            _ if has_default => self.default_wallet.clone(),
            Some(input) => PathBuf::from(input),
            None => return Err(AdbqError::invalid_wallet("")),
        };

        Wallet::open(path)
    }

    /// Asks which TNS alias of `wallet` to use; blank picks the first one.
    ///
    /// # Errors
    /// `MissingTnsNames` or `NoTnsAliases` if the wallet lists no alias.
    pub fn read_tns_alias(&mut self, wallet: &Wallet) -> Result<String> {
        let aliases = wallet.aliases()?;
        let first = aliases
            .first()
            .cloned()
            .ok_or_else(|| AdbqError::NoTnsAliases {
                path: wallet.tnsnames_path(),
            })?;

        let prompt = format!("TNS Alias (one of: {}) [{}]: ", aliases.join(", "), first);
        let preset = self.presets.tns_alias.take();
        let alias = default_if_blank(self.ask(preset, &prompt)?, &first);

        if !aliases.contains(&alias) {
            warn!(
                "TNS alias '{}' is not listed in {}",
                alias,
                wallet.tnsnames_path().display()
            );
        }

        Ok(alias)
    }

    /// Asks for the username; blank picks `Admin`.
    pub fn read_username(&mut self) -> Result<String> {
        let prompt = format!("Username [{}]: ", DEFAULT_USERNAME);
        let preset = self.presets.username.take();
        Ok(default_if_blank(self.ask(preset, &prompt)?, DEFAULT_USERNAME))
    }

    /// Asks for the password without echo.
    pub fn read_password(&mut self) -> Result<String> {
        self.prompter.read_password("Password: ")
    }

    /// Runs all four prompts.
    ///
    /// # Errors
    /// Any invalid answer; see the individual `read_*` methods. A blank
    /// password is rejected with `InvalidInput`.
    pub fn collect(&mut self) -> Result<ConnectionDetails> {
        let wallet = self.read_wallet()?;
        let tns_alias = self.read_tns_alias(&wallet)?;
        let username = self.read_username()?;
        let password = self.read_password()?;

        ConnectionDetails::new(
            tns_alias,
            wallet.dir(),
            Credentials::new(username, password),
        )
    }
}
