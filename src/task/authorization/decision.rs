//! Authorization decision values.

use crate::task::domain::SearchFilter;
use std::fmt;

/// Operation being authorized, used in log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskOperation {
    /// Creation of a new resource.
    Create,
    /// Read of an existing resource.
    Read,
    /// Update of an existing resource.
    Update,
    /// Deletion of an existing resource.
    Delete,
    /// Search over resources.
    Search,
}

impl TaskOperation {
    /// Returns the operation name as used in audit messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Search => "search",
        }
    }
}

impl fmt::Display for TaskOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of an authorization check.
///
/// The reason is meant for server-side audit logs only and must not be
/// echoed to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorizationDecision {
    /// The operation is permitted.
    Allowed {
        /// Which checks passed.
        reason: String,
    },
    /// The operation is refused.
    Denied {
        /// Which condition was not met.
        reason: String,
    },
}

impl AuthorizationDecision {
    /// Creates an allow decision.
    #[must_use]
    pub fn allowed(reason: impl Into<String>) -> Self {
        Self::Allowed {
            reason: reason.into(),
        }
    }

    /// Creates a deny decision.
    #[must_use]
    pub fn denied(reason: impl Into<String>) -> Self {
        Self::Denied {
            reason: reason.into(),
        }
    }

    /// Returns whether the operation is permitted.
    #[must_use]
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed { .. })
    }

    /// Returns the audit reason.
    #[must_use]
    pub fn reason(&self) -> &str {
        match self {
            Self::Allowed { reason } | Self::Denied { reason } => reason,
        }
    }
}

/// Outcome of a search authorization: always allowed, with a mandatory
/// result filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchAuthorization {
    reason: String,
    filter: SearchFilter,
}

impl SearchAuthorization {
    /// Creates a search authorization.
    #[must_use]
    pub fn new(reason: impl Into<String>, filter: SearchFilter) -> Self {
        Self {
            reason: reason.into(),
            filter,
        }
    }

    /// Returns the audit reason.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Returns the filter the store must apply to the result set.
    #[must_use]
    pub const fn filter(&self) -> &SearchFilter {
        &self.filter
    }

    /// Consumes the authorization, returning the filter.
    #[must_use]
    pub fn into_filter(self) -> SearchFilter {
        self.filter
    }
}
