//! Reference resolver port.

use crate::{
    identity::domain::{Organization, Principal},
    task::domain::{Reference, ResourceType},
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for reference resolution.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// A resource a reference resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedResource {
    /// The reference points to an organization.
    Organization(Organization),
    /// The reference points to a resource of another type.
    Other {
        /// Type of the resolved resource.
        resource_type: ResourceType,
        /// Logical id of the resolved resource.
        id: String,
    },
}

impl ResolvedResource {
    /// Returns the type of the resolved resource.
    #[must_use]
    pub const fn resource_type(&self) -> ResourceType {
        match self {
            Self::Organization(_) => ResourceType::Organization,
            Self::Other { resource_type, .. } => *resource_type,
        }
    }
}

/// Resolves references on a task to resources visible to the caller.
#[async_trait]
pub trait ReferenceResolver<S>: Send + Sync
where
    S: Sync + ?Sized,
{
    /// Resolves `reference`, expected to point to a resource of type
    /// `expected`, within the caller's read visibility.
    ///
    /// Returns `None` when the target does not exist or is not visible.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] when the lookup itself fails.
    async fn resolve_reference(
        &self,
        scope: &S,
        principal: &Principal,
        reference: &Reference,
        expected: ResourceType,
    ) -> ResolveResult<Option<ResolvedResource>>;
}

/// Errors returned by resolver implementations.
#[derive(Debug, Clone, Error)]
pub enum ResolveError {
    /// The backing store or remote server failed.
    #[error("reference resolution failed: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl ResolveError {
    /// Wraps a backing store error.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
