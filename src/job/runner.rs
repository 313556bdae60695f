//! Lifecycle driver for a single job execution.

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, warn};

use super::{BatchStatus, Job, JobExecution};
use crate::listener::{JobContext, JobListener};
use crate::properties::{Environment, PropertyStore};

/// Runs jobs between the callbacks of registered listeners.
pub struct JobRunner {
    listeners: Vec<Arc<dyn JobListener>>,
}

impl JobRunner {
    /// Listeners are called in the order given.
    pub fn new(listeners: Vec<Arc<dyn JobListener>>) -> Self {
        Self { listeners }
    }

    pub fn listener_names(&self) -> Vec<String> {
        self.listeners.iter().map(|l| l.name().to_string()).collect()
    }

    /// Executes `job` once.
    ///
    /// A failing `before_job` skips the remaining `before_job` calls and the
    /// job itself. Every listener's `after_job` runs regardless of outcome.
    pub async fn run(
        &self,
        job: &dyn Job,
        properties: &mut dyn PropertyStore,
        env: &dyn Environment,
    ) -> JobExecution {
        let job_name = job.name().to_string();
        let started_at = Utc::now();
        info!(job = %job_name, listeners = self.listeners.len(), "Job starting");

        let mut failure: Option<String> = None;

        for listener in &self.listeners {
            let mut ctx = JobContext::new(&job_name, &mut *properties, env);
            if let Err(e) = listener.before_job(&mut ctx) {
                error!(job = %job_name, listener = %listener.name(), error = %e, "before_job failed");
                failure = Some(e.to_string());
                break;
            }
        }

        let mut exit_status = String::new();
        if failure.is_none() {
            match job.execute(&*properties).await {
                Ok(status) => exit_status = status,
                Err(e) => {
                    error!(job = %job_name, error = %e, "Job failed");
                    failure = Some(e.to_string());
                }
            }
        }

        for listener in &self.listeners {
            let mut ctx = JobContext::new(&job_name, &mut *properties, env);
            if let Err(e) = listener.after_job(&mut ctx) {
                warn!(job = %job_name, listener = %listener.name(), error = %e, "after_job failed");
                if failure.is_none() {
                    failure = Some(e.to_string());
                }
            }
        }

        let (status, exit_status) = match failure {
            Some(message) => (BatchStatus::Failed, message),
            None => {
                if exit_status.is_empty() {
                    exit_status = BatchStatus::Completed.to_string();
                }
                (BatchStatus::Completed, exit_status)
            }
        };

        let execution = JobExecution {
            job_name,
            status,
            exit_status,
            started_at,
            ended_at: Utc::now(),
        };

        info!(
            job = %execution.job_name,
            status = %execution.status,
            exit_status = %execution.exit_status,
            elapsed_ms = execution.elapsed().num_milliseconds(),
            "Job finished"
        );

        execution
    }
}
