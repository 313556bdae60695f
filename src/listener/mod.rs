//! Job lifecycle listeners.
//!
//! The job host calls [`JobListener::before_job`] once before the job runs and
//! [`JobListener::after_job`] once after it ends, whatever the outcome.

mod bridge;
mod error;
mod mapping;

pub use bridge::EnvironmentPropertyBridge;
pub use error::ListenerError;
#[cfg(test)]
pub use mapping::DB_PROPERTY_MAPPINGS;

use crate::properties::{Environment, PropertyStore};

/// Result type for listener callbacks.
pub type Result<T> = std::result::Result<T, ListenerError>;

/// What a listener can see of the job being executed.
pub struct JobContext<'a> {
    /// Name of the job being executed.
    pub job_name: &'a str,
    /// Configuration store consulted by job configuration.
    pub properties: &'a mut dyn PropertyStore,
    /// Environment variables visible to the job.
    pub env: &'a dyn Environment,
}

impl<'a> JobContext<'a> {
    pub fn new(
        job_name: &'a str,
        properties: &'a mut dyn PropertyStore,
        env: &'a dyn Environment,
    ) -> Self {
        Self {
            job_name,
            properties,
            env,
        }
    }
}

/// Callbacks invoked around a job execution.
pub trait JobListener: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Called before the job starts.
    fn before_job(&self, ctx: &mut JobContext<'_>) -> Result<()>;

    /// Called after the job ends, whether it succeeded or not.
    fn after_job(&self, ctx: &mut JobContext<'_>) -> Result<()>;
}
