//! Database connectivity check built on the `db.*` properties.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::info;

use super::{Job, JobError, Result};
use crate::config::JobConfig;
use crate::properties::PropertyStore;

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 5432;

/// Database connection parameters resolved from configuration properties.
#[derive(Clone, PartialEq, Eq)]
pub struct DbSettings {
    pub host: String,
    pub port: u16,
    pub name: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
}

impl DbSettings {
    /// Reads `db.host`, `db.port`, `db.name`, `db.user` and `db.password`.
    pub fn from_properties(props: &dyn PropertyStore) -> Result<Self> {
        let host = props
            .get("db.host")?
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match props.get("db.port")? {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| JobError::InvalidProperty {
                    key: "db.port".into(),
                    value: raw.clone(),
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host,
            port,
            name: props.get("db.name")?,
            user: props.get("db.user")?,
            password: props.get("db.password")?,
        })
    }

    /// `host:port` pair suitable for a socket connect.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl fmt::Debug for DbSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "****"))
            .finish()
    }
}

/// Verifies that the configured database accepts TCP connections.
#[derive(Debug, Clone)]
pub struct ConnectionCheckJob {
    connect_timeout: Duration,
    dry_run: bool,
}

impl ConnectionCheckJob {
    pub fn new(connect_timeout: Duration, dry_run: bool) -> Self {
        Self {
            connect_timeout,
            dry_run,
        }
    }

    pub fn from_config(cfg: &JobConfig) -> Self {
        Self::new(cfg.connect_timeout, cfg.dry_run)
    }
}

#[async_trait]
impl Job for ConnectionCheckJob {
    fn name(&self) -> &str {
        "connection-check"
    }

    async fn execute(&self, properties: &dyn PropertyStore) -> Result<String> {
        let settings = DbSettings::from_properties(properties)?;
        info!(
            host = %settings.host,
            port = settings.port,
            database = settings.name.as_deref().unwrap_or("-"),
            user = settings.user.as_deref().unwrap_or("-"),
            "Resolved database settings"
        );

        if self.dry_run {
            info!("Dry run, skipping connection attempt");
            return Ok("SKIPPED".to_string());
        }

        let address = settings.address();
        let stream = timeout(self.connect_timeout, TcpStream::connect(&address))
            .await
            .map_err(|_| JobError::Timeout(self.connect_timeout))??;

        info!(address = %address, peer = ?stream.peer_addr().ok(), "Database reachable");
        Ok("COMPLETED".to_string())
    }
}
