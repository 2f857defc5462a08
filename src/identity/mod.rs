//! Organization identity and caller classification.
//!
//! A node hosts one or more *local* organizations and trusts the
//! organizations of its federation peers as *remote*. Callers are
//! classified as local or remote users through the
//! [`ports::OrganizationDirectory`], and authenticated from their client
//! certificate thumbprints by [`services::CertificateAuthenticator`].
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Authentication services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
