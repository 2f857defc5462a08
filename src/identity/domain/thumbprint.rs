//! SHA-512 client certificate thumbprints.

use super::IdentityDomainError;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha512};
use std::fmt;

const THUMBPRINT_HEX_LENGTH: usize = 128;

/// Lowercase hex encoded SHA-512 digest of a DER encoded certificate.
///
/// # Examples
///
/// ```
/// use taskgate::identity::domain::CertificateThumbprint;
///
/// let thumbprint = CertificateThumbprint::of_der(b"certificate bytes");
/// let parsed = CertificateThumbprint::parse(&thumbprint.as_str().to_uppercase())
///     .expect("valid thumbprint");
/// assert_eq!(parsed, thumbprint);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CertificateThumbprint(String);

impl CertificateThumbprint {
    /// Computes the thumbprint of a DER encoded certificate.
    #[must_use]
    pub fn of_der(der: &[u8]) -> Self {
        Self(
            Sha512::digest(der)
                .iter()
                .map(|byte| format!("{byte:02x}"))
                .collect(),
        )
    }

    /// Parses a hex encoded thumbprint, normalising it to lowercase.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityDomainError::InvalidThumbprint`] when the value is
    /// not exactly 128 hex digits.
    pub fn parse(value: &str) -> Result<Self, IdentityDomainError> {
        let trimmed = value.trim();
        if trimmed.len() != THUMBPRINT_HEX_LENGTH
            || !trimmed.chars().all(|ch| ch.is_ascii_hexdigit())
        {
            return Err(IdentityDomainError::InvalidThumbprint(value.to_owned()));
        }
        Ok(Self(trimmed.to_ascii_lowercase()))
    }

    /// Returns the hex representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CertificateThumbprint {
    type Error = IdentityDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CertificateThumbprint> for String {
    fn from(value: CertificateThumbprint) -> Self {
        value.0
    }
}

impl fmt::Display for CertificateThumbprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
