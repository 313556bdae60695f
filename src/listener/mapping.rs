//! Environment variable to configuration key mappings.

/// Copies one environment variable into one configuration key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyMapping {
    pub env_var: &'static str,
    pub property: &'static str,
}

impl PropertyMapping {
    pub const fn new(env_var: &'static str, property: &'static str) -> Self {
        Self { env_var, property }
    }
}

/// PostgreSQL service variables, in the order they are copied.
pub const DB_PROPERTY_MAPPINGS: &[PropertyMapping] = &[
    PropertyMapping::new("POSTGRESQL_SERVICE_HOST", "db.host"),
    PropertyMapping::new("POSTGRESQL_SERVICE_PORT", "db.port"),
    PropertyMapping::new("POSTGRESQL_DATABASE", "db.name"),
    PropertyMapping::new("POSTGRESQL_USER", "db.user"),
    PropertyMapping::new("POSTGRESQL_PASSWORD", "db.password"),
];
