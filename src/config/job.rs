//! Job execution settings.

use serde::Deserialize;
use std::time::Duration;

use super::duration;

const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Settings for the connection check job.
#[derive(Debug, Clone, Deserialize)]
pub struct JobConfig {
    /// Maximum time to wait for the database socket to accept.
    #[serde(default = "default_connect_timeout", with = "duration")]
    pub connect_timeout: Duration,
    /// Resolve settings but skip the connection attempt.
    #[serde(default)]
    pub dry_run: bool,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            dry_run: false,
        }
    }
}

fn default_connect_timeout() -> Duration {
    DEFAULT_CONNECT_TIMEOUT
}
