//! Port contracts for process catalog lookups.

pub mod catalog;

pub use catalog::{CatalogError, CatalogResult, ProcessCatalog};
