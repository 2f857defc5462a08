//! Domain model for organizations and authenticated principals.

mod error;
mod organization;
mod principal;
mod thumbprint;

pub use error::IdentityDomainError;
pub use organization::{Organization, OrganizationId, OrganizationIdentifier};
pub use principal::{Principal, PrincipalRole};
pub use thumbprint::CertificateThumbprint;
