//! Secure credential container with automatic memory zeroing.
//!
//! # Security
//! - Username and password are stored in `Zeroizing<String>` containers
//! - Memory is cleared when the credentials go out of scope
//! - `Debug` never prints the password

use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Database username and password, wiped from memory on drop.
///
/// # Example
///
/// ```rust
/// use adbq_core::security::Credentials;
///
/// let creds = Credentials::new("Admin".to_string(), "Welcome_1234".to_string());
/// assert_eq!(creds.username(), "Admin");
/// assert!(creds.has_password());
/// assert!(!format!("{:?}", creds).contains("Welcome_1234"));
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Credentials {
    username: Zeroizing<String>,
    password: Zeroizing<String>,
}

impl Credentials {
    /// Creates new credentials with automatic memory zeroing.
    pub fn new(username: String, password: String) -> Self {
        Self {
            username: Zeroizing::new(username),
            password: Zeroizing::new(password),
        }
    }

    /// Gets the username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Checks if a non-blank password is present without exposing it.
    pub fn has_password(&self) -> bool {
        !self.password.trim().is_empty()
    }

    /// Hands the password to the driver. Never log the returned value.
    pub(crate) fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username())
            .field("password", &"xxxxxx")
            .finish()
    }
}
