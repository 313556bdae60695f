//! In-memory property store implementations.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use super::{PropertyError, PropertyStore, Result};

/// Plain in-memory property store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemProperties {
    entries: BTreeMap<String, String>,
}

impl SystemProperties {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys with a value.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for SystemProperties
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl PropertyStore for SystemProperties {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if key.trim().is_empty() {
            return Err(PropertyError::InvalidKey(key.to_string()));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Process-wide store shared between the host and its listeners.
///
/// Clones refer to the same underlying properties.
#[derive(Debug, Clone, Default)]
pub struct SharedProperties {
    inner: Arc<RwLock<SystemProperties>>,
}

impl SharedProperties {
    pub fn new(initial: SystemProperties) -> Self {
        Self {
            inner: Arc::new(RwLock::new(initial)),
        }
    }

    /// Copies the current contents out of the store.
    pub fn snapshot(&self) -> Result<SystemProperties> {
        let guard = self
            .inner
            .read()
            .map_err(|e| PropertyError::Unavailable(e.to_string()))?;
        Ok(guard.clone())
    }

    /// Poisons the lock by panicking while holding it.
    #[cfg(test)]
    pub(crate) fn poison(&self) {
        let inner = Arc::clone(&self.inner);
        let _ = std::thread::spawn(move || {
            let _guard = inner.write().unwrap();
            panic!("poisoning property store");
        })
        .join();
    }
}

impl PropertyStore for SharedProperties {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let guard = self
            .inner
            .read()
            .map_err(|e| PropertyError::Unavailable(e.to_string()))?;
        guard.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut guard = self
            .inner
            .write()
            .map_err(|e| PropertyError::Unavailable(e.to_string()))?;
        guard.set(key, value)
    }
}
