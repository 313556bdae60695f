//! Job error types.

use std::time::Duration;

use thiserror::Error;

use crate::properties::PropertyError;

/// Job execution error.
#[derive(Debug, Error)]
pub enum JobError {
    #[error("property store error: {0}")]
    Property(#[from] PropertyError),
    #[error("invalid value for {key}: {value:?}")]
    InvalidProperty { key: String, value: String },
    #[error("connection error: {0}")]
    Connection(#[from] std::io::Error),
    #[error("connection timed out after {0:?}")]
    Timeout(Duration),
}
