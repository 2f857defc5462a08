//! Identity services.

mod authentication;

pub use authentication::CertificateAuthenticator;
