//! Listener error types.

use thiserror::Error;

use crate::properties::PropertyError;

/// Error raised by a lifecycle callback.
#[derive(Debug, Error)]
pub enum ListenerError {
    #[error("property store error: {0}")]
    Property(#[from] PropertyError),
}
