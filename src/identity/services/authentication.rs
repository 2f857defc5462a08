//! Client-certificate authentication.

use crate::{
    config::NodeConfig,
    identity::{
        domain::{CertificateThumbprint, OrganizationId, Principal, PrincipalRole},
        ports::OrganizationDirectory,
    },
};
use std::sync::Arc;
use tracing::{info, warn};

/// Maps client certificate thumbprints to principals.
///
/// Thumbprints configured as local-user thumbprints authenticate as
/// [`PrincipalRole::Local`] users of the node's organization. Thumbprints
/// registered on an active remote organization authenticate as
/// [`PrincipalRole::Remote`] users of that organization. Everything else is
/// rejected.
#[derive(Clone)]
pub struct CertificateAuthenticator<D>
where
    D: OrganizationDirectory,
{
    directory: Arc<D>,
    local_organization: OrganizationId,
    local_user_thumbprints: Vec<CertificateThumbprint>,
}

impl<D> CertificateAuthenticator<D>
where
    D: OrganizationDirectory,
{
    /// Creates an authenticator for the given node configuration.
    #[must_use]
    pub fn new(directory: Arc<D>, config: &NodeConfig) -> Self {
        Self {
            directory,
            local_organization: config.local_organization.clone(),
            local_user_thumbprints: config.local_user_thumbprints.clone(),
        }
    }

    /// Authenticates a caller presenting a certificate with the given
    /// subject name and thumbprint.
    ///
    /// Returns `None` when the thumbprint is unknown.
    #[must_use]
    pub fn authenticate(
        &self,
        subject_name: &str,
        thumbprint: &CertificateThumbprint,
    ) -> Option<Principal> {
        let (role, organization) = if self.local_user_thumbprints.contains(thumbprint) {
            (PrincipalRole::Local, self.local_organization.clone())
        } else if let Some(remote) = self
            .directory
            .find_by_thumbprint(thumbprint)
            .filter(|org| !self.directory.is_local(org))
        {
            (PrincipalRole::Remote, remote.id().clone())
        } else {
            warn!(subject = subject_name, %thumbprint, "unknown client certificate");
            return None;
        };

        match Principal::new(subject_name, role, organization) {
            Ok(principal) => {
                info!(
                    subject = principal.name(),
                    role = %principal.role(),
                    organization = %principal.organization(),
                    "client certificate authenticated"
                );
                Some(principal.with_thumbprint(thumbprint.clone()))
            }
            Err(err) => {
                warn!(%thumbprint, error = %err, "rejecting client certificate");
                None
            }
        }
    }
}
