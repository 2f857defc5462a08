//! Error types for task domain parsing.

use thiserror::Error;

/// Errors returned while constructing task domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// Resource versions start at 1.
    #[error("invalid resource version {0}, expected a positive integer")]
    InvalidResourceVersion(u64),

    /// The resource type name is not supported.
    #[error("unsupported resource type: {0}")]
    UnsupportedResourceType(String),
}

/// Error returned while parsing task statuses from their wire tokens.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
