//! Listener that copies database environment variables into configuration
//! properties before a job starts.

use tracing::{debug, info};

use super::mapping::{DB_PROPERTY_MAPPINGS, PropertyMapping};
use super::{JobContext, JobListener, Result};
use crate::properties::{Environment, PropertyStore};

/// Outcome of one copy pass, listed by configuration key in mapping order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BridgeReport {
    /// Keys that were set from their environment variable.
    pub copied: Vec<&'static str>,
    /// Keys left alone because they already had a value.
    pub already_set: Vec<&'static str>,
    /// Keys left unset because their environment variable is absent.
    pub missing: Vec<&'static str>,
}

/// Copies `POSTGRESQL_*` variables to `db.*` properties.
///
/// A property that already has a value is never overwritten, so values set
/// on the command line or in the config file win over the environment.
#[derive(Debug, Clone, Copy)]
pub struct EnvironmentPropertyBridge {
    mappings: &'static [PropertyMapping],
}

impl Default for EnvironmentPropertyBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvironmentPropertyBridge {
    pub fn new() -> Self {
        Self {
            mappings: DB_PROPERTY_MAPPINGS,
        }
    }

    /// Runs the copy pass against `store`.
    ///
    /// The environment is only consulted for keys that are still unset.
    pub fn copy_env(
        &self,
        store: &mut dyn PropertyStore,
        env: &dyn Environment,
    ) -> Result<BridgeReport> {
        info!("Copying environment variables to configuration properties");

        let mut report = BridgeReport::default();
        for mapping in self.mappings {
            if store.contains(mapping.property)? {
                debug!(key = %mapping.property, "Property already set, not overwriting");
                report.already_set.push(mapping.property);
                continue;
            }

            match env.var(mapping.env_var) {
                Some(value) => {
                    store.set(mapping.property, &value)?;
                    info!(key = %mapping.property, value = %value, "Copied to configuration property");
                    report.copied.push(mapping.property);
                }
                None => {
                    debug!(env = %mapping.env_var, "Environment variable not set");
                    report.missing.push(mapping.property);
                }
            }
        }

        Ok(report)
    }
}

impl JobListener for EnvironmentPropertyBridge {
    fn name(&self) -> &str {
        "environment-property-bridge"
    }

    fn before_job(&self, ctx: &mut JobContext<'_>) -> Result<()> {
        let report = self.copy_env(ctx.properties, ctx.env)?;
        debug!(
            job = %ctx.job_name,
            copied = report.copied.len(),
            already_set = report.already_set.len(),
            missing = report.missing.len(),
            "Environment copy finished"
        );
        Ok(())
    }

    fn after_job(&self, _ctx: &mut JobContext<'_>) -> Result<()> {
        Ok(())
    }
}
