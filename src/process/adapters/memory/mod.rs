//! In-memory process catalog.

mod catalog;

pub use catalog::InMemoryProcessCatalog;
