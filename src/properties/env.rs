//! Sources of environment variables.

use std::env::{self, VarError};

use tracing::warn;

/// Read-only view of environment variables.
pub trait Environment: Send + Sync {
    /// Returns the value of `name`, or `None` if it is not set.
    fn var(&self, name: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        match env::var(name) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => {
                warn!(name = %name, "Ignoring environment variable with non-UTF-8 value");
                None
            }
        }
    }
}

/// Fixed set of variables, independent of the process environment.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MapEnvironment {
    vars: std::collections::HashMap<String, String>,
}

#[cfg(test)]
impl MapEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a variable.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

#[cfg(test)]
impl<K, V> FromIterator<(K, V)> for MapEnvironment
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
impl Environment for MapEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}
