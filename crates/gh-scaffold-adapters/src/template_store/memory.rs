//! In-memory template store with built-in templates.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use gh_scaffold_core::{
    application::{ApplicationError, ports::TemplateStore},
    error::ScaffoldResult,
};
use tracing::debug;

use crate::builtin_templates::BUILTIN_TEMPLATES;

/// Thread-safe in-memory template store.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a store with built-in templates loaded.
    pub fn with_builtin() -> ScaffoldResult<Self> {
        let store = Self::new();
        store.load_builtin()?;
        Ok(store)
    }

    /// Load built-in templates.
    pub fn load_builtin(&self) -> ScaffoldResult<()> {
        for (name, content) in BUILTIN_TEMPLATES {
            self.insert(name, content)?;
        }
        debug!(count = BUILTIN_TEMPLATES.len(), "Built-in templates loaded");
        Ok(())
    }

    /// Insert or replace a template.
    pub fn insert(&self, name: &str, content: &str) -> ScaffoldResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.insert(name.to_string(), content.to_string());
        Ok(())
    }

    /// Get the number of templates.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateStore for InMemoryStore {
    fn read(&self, name: &str) -> ScaffoldResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.get(name).cloned().ok_or_else(|| {
            ApplicationError::TemplateMissing {
                name: name.to_string(),
                path: None,
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_store_serves_every_template() {
        let store = InMemoryStore::with_builtin().unwrap();
        assert_eq!(store.len(), BUILTIN_TEMPLATES.len());
        assert!(store.read("LICENSE_GPL_3_0").unwrap().contains("GNU General Public License"));
    }

    #[test]
    fn unknown_template_is_missing() {
        let store = InMemoryStore::new();
        assert!(store.is_empty());

        let err = store.read("NOPE.md").unwrap_err();
        assert!(err.to_string().contains("NOPE.md"));
    }

    #[test]
    fn insert_replaces_existing() {
        let store = InMemoryStore::with_builtin().unwrap();
        store.insert("SECURITY.md", "custom\n").unwrap();
        assert_eq!(store.read("SECURITY.md").unwrap(), "custom\n");
    }
}
