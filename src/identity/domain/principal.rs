//! Authenticated callers.

use super::{CertificateThumbprint, IdentityDomainError, OrganizationId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a caller was authenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrincipalRole {
    /// Authenticated directly by this node.
    Local,
    /// Authenticated as a representative of a federation peer.
    Remote,
}

impl PrincipalRole {
    /// Returns the canonical representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Remote => "remote",
        }
    }
}

impl fmt::Display for PrincipalRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The caller of an operation, associated with exactly one organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    name: String,
    role: PrincipalRole,
    organization: OrganizationId,
    thumbprint: Option<CertificateThumbprint>,
}

impl Principal {
    /// Creates a principal.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityDomainError::EmptyPrincipalName`] when the name is
    /// blank.
    pub fn new(
        name: impl Into<String>,
        role: PrincipalRole,
        organization: OrganizationId,
    ) -> Result<Self, IdentityDomainError> {
        let trimmed = name.into().trim().to_owned();
        if trimmed.is_empty() {
            return Err(IdentityDomainError::EmptyPrincipalName);
        }
        Ok(Self {
            name: trimmed,
            role,
            organization,
            thumbprint: None,
        })
    }

    /// Records the certificate thumbprint the principal authenticated with.
    #[must_use]
    pub fn with_thumbprint(mut self, thumbprint: CertificateThumbprint) -> Self {
        self.thumbprint = Some(thumbprint);
        self
    }

    /// Returns the principal name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the authentication role.
    #[must_use]
    pub const fn role(&self) -> PrincipalRole {
        self.role
    }

    /// Returns the organization the principal acts for.
    #[must_use]
    pub const fn organization(&self) -> &OrganizationId {
        &self.organization
    }

    /// Returns the certificate thumbprint, if known.
    #[must_use]
    pub const fn thumbprint(&self) -> Option<&CertificateThumbprint> {
        self.thumbprint.as_ref()
    }
}
