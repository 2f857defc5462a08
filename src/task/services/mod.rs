//! Application services for task access.

mod access;

pub use access::{TaskAccessError, TaskAccessResult, TaskAccessService};
