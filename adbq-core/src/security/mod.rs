//! Credential protection.
//!
//! - `credentials`: username/password container with automatic memory zeroing
//! - `connection`: the connection details handed from the prompts to the pool
//!
//! Passwords are never rendered by `Display` or `Debug` of either type.

mod connection;
mod credentials;

pub use connection::ConnectionDetails;
pub use credentials::Credentials;
