//! In-memory process catalog keyed by `(process, version, message)`.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::{
    identity::domain::Principal,
    process::{
        domain::{ProcessAllowEntry, ProcessKey},
        ports::{CatalogError, CatalogResult, ProcessCatalog},
    },
};

/// Thread-safe in-memory process catalog.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProcessCatalog {
    entries: Arc<RwLock<HashMap<ProcessKey, ProcessAllowEntry>>>,
}

impl InMemoryProcessCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers or replaces an entry.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Unavailable`] when the catalog lock is
    /// poisoned.
    pub fn register(&self, entry: ProcessAllowEntry) -> CatalogResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|err| CatalogError::unavailable(std::io::Error::other(err.to_string())))?;
        entries.insert(entry.key().clone(), entry);
        Ok(())
    }
}

#[async_trait]
impl<S> ProcessCatalog<S> for InMemoryProcessCatalog
where
    S: Sync + ?Sized,
{
    async fn find_allowed_process(
        &self,
        _scope: &S,
        principal: &Principal,
        key: &ProcessKey,
    ) -> CatalogResult<Option<ProcessAllowEntry>> {
        let entries = self
            .entries
            .read()
            .map_err(|err| CatalogError::unavailable(std::io::Error::other(err.to_string())))?;
        Ok(entries
            .get(key)
            .filter(|entry| entry.permits(principal))
            .cloned())
    }
}
