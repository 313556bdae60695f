//! Property store error types.

use thiserror::Error;

/// Property store error.
#[derive(Debug, Error)]
pub enum PropertyError {
    /// The backing store could not be accessed.
    #[error("property store unavailable: {0}")]
    Unavailable(String),
    /// A key that cannot be stored was supplied.
    #[error("invalid property key: {0:?}")]
    InvalidKey(String),
}
