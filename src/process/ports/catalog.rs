//! Process catalog port.

use crate::{
    identity::domain::Principal,
    process::domain::{ProcessAllowEntry, ProcessKey},
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for catalog lookups.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Registry of processes and messages the node accepts.
///
/// The scope `S` is the caller-supplied snapshot the lookup must read
/// through; implementations never begin or commit transactions.
#[async_trait]
pub trait ProcessCatalog<S>: Send + Sync
where
    S: Sync + ?Sized,
{
    /// Finds the entry for `key` that is active and permitted for the
    /// principal.
    ///
    /// Returns `None` when no such entry exists.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when the catalog cannot be queried.
    async fn find_allowed_process(
        &self,
        scope: &S,
        principal: &Principal,
        key: &ProcessKey,
    ) -> CatalogResult<Option<ProcessAllowEntry>>;
}

/// Errors returned by catalog implementations.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// The backing store failed.
    #[error("process catalog unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl CatalogError {
    /// Wraps a backing store error.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
