//! Organization directory port.

use crate::identity::domain::{CertificateThumbprint, Organization, OrganizationId, Principal};
use std::sync::Arc;
use thiserror::Error;

/// Result type for directory maintenance operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Errors returned while maintaining a directory.
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    /// The backing store failed.
    #[error("organization directory unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl DirectoryError {
    /// Wraps a backing store error.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}

/// Classifies principals and organizations as local or remote.
///
/// Implementations must be stateless with respect to individual calls and
/// safe to share between concurrent authorization decisions.
pub trait OrganizationDirectory: Send + Sync {
    /// Returns whether the organization is hosted by this node.
    fn is_local(&self, organization: &Organization) -> bool;

    /// Returns whether the principal was authenticated directly by this node
    /// and acts for a known, active local organization.
    fn is_local_user(&self, principal: &Principal) -> bool;

    /// Returns whether the principal represents a known, active federation
    /// peer organization.
    fn is_remote_user(&self, principal: &Principal) -> bool;

    /// Looks up an organization by id.
    fn find_by_id(&self, id: &OrganizationId) -> Option<Organization>;

    /// Looks up an organization by business identifier.
    fn find_by_identifier(&self, system: &str, value: &str) -> Option<Organization>;

    /// Looks up the organization owning a client certificate thumbprint.
    fn find_by_thumbprint(&self, thumbprint: &CertificateThumbprint) -> Option<Organization>;
}
