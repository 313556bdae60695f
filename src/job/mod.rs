//! Job host: runs one job between the lifecycle callbacks of its listeners.

mod connection;
mod error;
mod runner;

pub use connection::ConnectionCheckJob;
#[cfg(test)]
pub use connection::DbSettings;
pub use error::JobError;
pub use runner::JobRunner;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt;

use crate::properties::PropertyStore;

/// Result type for job operations.
pub type Result<T> = std::result::Result<T, JobError>;

/// Unit of work executed by the [`JobRunner`].
#[async_trait]
pub trait Job: Send + Sync {
    /// Name of the job, passed to listeners and logs.
    fn name(&self) -> &str;

    /// Runs the job against the properties prepared by the listeners.
    /// Returns the exit status on success.
    async fn execute(&self, properties: &dyn PropertyStore) -> Result<String>;
}

/// Final status of a job execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchStatus {
    Completed,
    Failed,
}

impl fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchStatus::Completed => write!(f, "COMPLETED"),
            BatchStatus::Failed => write!(f, "FAILED"),
        }
    }
}

/// Record of one job execution.
#[derive(Debug, Clone)]
pub struct JobExecution {
    pub job_name: String,
    pub status: BatchStatus,
    pub exit_status: String,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
}

impl JobExecution {
    pub fn is_success(&self) -> bool {
        self.status == BatchStatus::Completed
    }

    pub fn elapsed(&self) -> chrono::Duration {
        self.ended_at - self.started_at
    }
}
