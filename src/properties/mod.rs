//! Configuration store and environment abstractions.
//!
//! Listeners never touch process-global state directly: the job host hands
//! them a [`PropertyStore`] to read and write and an [`Environment`] to read
//! variables from.

mod env;
mod error;
mod store;

#[cfg(test)]
pub use env::MapEnvironment;
pub use env::{Environment, ProcessEnvironment};
pub use error::PropertyError;
pub use store::{SharedProperties, SystemProperties};

/// Result type for property store operations.
pub type Result<T> = std::result::Result<T, PropertyError>;

/// String-keyed configuration store consulted by job configuration.
///
/// There is intentionally no delete operation.
pub trait PropertyStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` if it is not set.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Returns true if `key` has a value.
    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }
}

#[cfg(test)]
mod tests;
