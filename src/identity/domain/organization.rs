//! Organization records known to the node.

use super::{CertificateThumbprint, IdentityDomainError};
use serde::{Deserialize, Serialize};
use std::fmt;

const MAX_ID_LENGTH: usize = 64;

/// Logical id of an organization resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrganizationId(String);

impl OrganizationId {
    /// Creates a validated organization id.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityDomainError::InvalidOrganizationId`] when the value
    /// is empty, longer than 64 characters or contains characters outside
    /// `[A-Za-z0-9-.]`.
    pub fn new(value: impl Into<String>) -> Result<Self, IdentityDomainError> {
        let raw = value.into();
        let valid = !raw.is_empty()
            && raw.len() <= MAX_ID_LENGTH
            && raw
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '.');
        if !valid {
            return Err(IdentityDomainError::InvalidOrganizationId(raw));
        }
        Ok(Self(raw))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for OrganizationId {
    type Error = IdentityDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OrganizationId> for String {
    fn from(value: OrganizationId) -> Self {
        value.0
    }
}

impl fmt::Display for OrganizationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Business identifier of an organization, for example its federation-wide
/// identifier `http://example.org/sid/organization-identifier|ORG-A`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrganizationIdentifier {
    system: String,
    value: String,
}

impl OrganizationIdentifier {
    /// Creates an identifier from its system and value.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityDomainError::EmptyIdentifier`] when either part is
    /// blank.
    pub fn new(
        system: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, IdentityDomainError> {
        let trimmed_system = system.into().trim().to_owned();
        let trimmed_value = value.into().trim().to_owned();
        if trimmed_system.is_empty() || trimmed_value.is_empty() {
            return Err(IdentityDomainError::EmptyIdentifier);
        }
        Ok(Self {
            system: trimmed_system,
            value: trimmed_value,
        })
    }

    /// Returns the identifier system.
    #[must_use]
    pub fn system(&self) -> &str {
        &self.system
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns whether this identifier matches the given system and value.
    #[must_use]
    pub fn matches(&self, system: &str, value: &str) -> bool {
        self.system == system && self.value == value
    }
}

impl fmt::Display for OrganizationIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.system, self.value)
    }
}

/// Organization taking part in the federation.
///
/// The `local` flag marks organizations hosted by this node; every other
/// organization is a federation peer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    id: OrganizationId,
    identifier: Option<OrganizationIdentifier>,
    name: String,
    active: bool,
    local: bool,
    thumbprints: Vec<CertificateThumbprint>,
}

impl Organization {
    /// Creates an active organization hosted by this node.
    #[must_use]
    pub fn local(id: OrganizationId, name: impl Into<String>) -> Self {
        Self::new(id, name, true)
    }

    /// Creates an active organization of a federation peer.
    #[must_use]
    pub fn remote(id: OrganizationId, name: impl Into<String>) -> Self {
        Self::new(id, name, false)
    }

    fn new(id: OrganizationId, name: impl Into<String>, local: bool) -> Self {
        Self {
            id,
            identifier: None,
            name: name.into(),
            active: true,
            local,
            thumbprints: Vec::new(),
        }
    }

    /// Sets the business identifier.
    #[must_use]
    pub fn with_identifier(mut self, identifier: OrganizationIdentifier) -> Self {
        self.identifier = Some(identifier);
        self
    }

    /// Registers a client certificate thumbprint for this organization.
    #[must_use]
    pub fn with_thumbprint(mut self, thumbprint: CertificateThumbprint) -> Self {
        if !self.thumbprints.contains(&thumbprint) {
            self.thumbprints.push(thumbprint);
        }
        self
    }

    /// Marks the organization inactive.
    #[must_use]
    pub fn deactivated(mut self) -> Self {
        self.active = false;
        self
    }

    /// Returns the organization id.
    #[must_use]
    pub const fn id(&self) -> &OrganizationId {
        &self.id
    }

    /// Returns the business identifier, if any.
    #[must_use]
    pub const fn identifier(&self) -> Option<&OrganizationIdentifier> {
        self.identifier.as_ref()
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns whether the organization is active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Returns whether the organization is hosted by this node.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        self.local
    }

    /// Returns the registered client certificate thumbprints.
    #[must_use]
    pub fn thumbprints(&self) -> &[CertificateThumbprint] {
        &self.thumbprints
    }
}
