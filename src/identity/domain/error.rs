//! Error types for identity domain validation.

use thiserror::Error;

/// Errors returned while constructing identity domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentityDomainError {
    /// The organization id is empty or contains unsupported characters.
    #[error("invalid organization id '{0}', expected 1-64 characters of [A-Za-z0-9-.]")]
    InvalidOrganizationId(String),

    /// An identifier system or value is empty after trimming.
    #[error("organization identifier requires a non-empty system and value")]
    EmptyIdentifier,

    /// The principal name is empty after trimming.
    #[error("principal name must not be empty")]
    EmptyPrincipalName,

    /// The thumbprint is not a hex encoded SHA-512 digest.
    #[error("invalid certificate thumbprint '{0}', expected 128 hex digits")]
    InvalidThumbprint(String),
}
