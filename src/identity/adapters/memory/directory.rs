//! In-memory organization directory.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::identity::{
    domain::{CertificateThumbprint, Organization, OrganizationId, Principal, PrincipalRole},
    ports::{DirectoryError, DirectoryResult, OrganizationDirectory},
};

/// Thread-safe in-memory organization registry.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrganizationDirectory {
    state: Arc<RwLock<HashMap<OrganizationId, Organization>>>,
}

impl InMemoryOrganizationDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directory pre-populated with organizations.
    #[must_use]
    pub fn with_organizations(organizations: impl IntoIterator<Item = Organization>) -> Self {
        let state = organizations
            .into_iter()
            .map(|organization| (organization.id().clone(), organization))
            .collect();
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Registers or replaces an organization.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Unavailable`] when the directory lock is
    /// poisoned.
    pub fn register(&self, organization: Organization) -> DirectoryResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| DirectoryError::unavailable(std::io::Error::other(err.to_string())))?;
        state.insert(organization.id().clone(), organization);
        Ok(())
    }

    fn registered(&self, id: &OrganizationId) -> Option<Organization> {
        self.state
            .read()
            .ok()
            .and_then(|state| state.get(id).cloned())
    }

    fn user_matches(&self, principal: &Principal, role: PrincipalRole, local: bool) -> bool {
        principal.role() == role
            && self
                .registered(principal.organization())
                .is_some_and(|org| org.is_active() && org.is_local() == local)
    }
}

impl OrganizationDirectory for InMemoryOrganizationDirectory {
    fn is_local(&self, organization: &Organization) -> bool {
        self.registered(organization.id())
            .is_some_and(|org| org.is_active() && org.is_local())
    }

    fn is_local_user(&self, principal: &Principal) -> bool {
        self.user_matches(principal, PrincipalRole::Local, true)
    }

    fn is_remote_user(&self, principal: &Principal) -> bool {
        self.user_matches(principal, PrincipalRole::Remote, false)
    }

    fn find_by_id(&self, id: &OrganizationId) -> Option<Organization> {
        self.registered(id)
    }

    fn find_by_identifier(&self, system: &str, value: &str) -> Option<Organization> {
        self.state.read().ok().and_then(|state| {
            state
                .values()
                .find(|org| {
                    org.identifier()
                        .is_some_and(|identifier| identifier.matches(system, value))
                })
                .cloned()
        })
    }

    fn find_by_thumbprint(&self, thumbprint: &CertificateThumbprint) -> Option<Organization> {
        self.state.read().ok().and_then(|state| {
            state
                .values()
                .find(|org| org.is_active() && org.thumbprints().contains(thumbprint))
                .cloned()
        })
    }
}
