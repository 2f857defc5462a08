//! Port contracts for organization lookup and caller classification.

pub mod directory;

pub use directory::{DirectoryError, DirectoryResult, OrganizationDirectory};
