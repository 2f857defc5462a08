//! Error types for process-URI parsing.

use thiserror::Error;

/// Error returned when a version is not `<major>.<minor>.<patch>`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid process version '{0}', expected <major>.<minor>.<patch>")]
pub struct ParseProcessVersionError(pub String);

/// Errors returned while parsing an `instantiatesUri`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProcessUriError {
    /// The URI does not start with `http://` or `https://`.
    #[error("process URI '{0}' must start with 'http://' or 'https://'")]
    UnsupportedScheme(String),

    /// The URI has no `/bpe/Process/<name>/<version>` path.
    #[error("process URI '{0}' must end with /bpe/Process/<name>/<version>")]
    MissingProcessPath(String),

    /// The URI has no host or base path before `/bpe/Process`.
    #[error("process URI '{0}' has an empty base URL")]
    EmptyBase(String),

    /// The process name contains characters outside `[-A-Za-z0-9_]`.
    #[error("process name '{0}' must match [-A-Za-z0-9_]+")]
    InvalidProcessName(String),

    /// The trailing version segment is not a semantic version.
    #[error(transparent)]
    InvalidVersion(#[from] ParseProcessVersionError),
}
