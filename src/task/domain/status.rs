//! Task status codes.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a task.
///
/// Only `Draft`, `Requested`, `InProgress`, `Completed` and `Failed` are
/// reachable through the authorization engine; the remaining codes exist so
/// that any stored task can be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Task is being prepared by the requester.
    Draft,
    /// Task has been issued to the recipient.
    Requested,
    /// Task has been received.
    Received,
    /// Task has been accepted.
    Accepted,
    /// Task has been rejected.
    Rejected,
    /// Task is ready to be performed.
    Ready,
    /// Task has been cancelled.
    Cancelled,
    /// Recipient is processing the task.
    InProgress,
    /// Task is on hold.
    OnHold,
    /// Processing failed.
    Failed,
    /// Processing completed.
    Completed,
    /// Task was entered in error.
    EnteredInError,
}

impl TaskStatus {
    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Requested => "requested",
            Self::Received => "received",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Ready => "ready",
            Self::Cancelled => "cancelled",
            Self::InProgress => "in-progress",
            Self::OnHold => "on-hold",
            Self::Failed => "failed",
            Self::Completed => "completed",
            Self::EnteredInError => "entered-in-error",
        }
    }

    /// Returns whether a task may be created or redrafted with this status.
    #[must_use]
    pub const fn is_issuable(self) -> bool {
        matches!(self, Self::Draft | Self::Requested)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "draft" => Ok(Self::Draft),
            "requested" => Ok(Self::Requested),
            "received" => Ok(Self::Received),
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            "ready" => Ok(Self::Ready),
            "cancelled" => Ok(Self::Cancelled),
            "in-progress" => Ok(Self::InProgress),
            "on-hold" => Ok(Self::OnHold),
            "failed" => Ok(Self::Failed),
            "completed" => Ok(Self::Completed),
            "entered-in-error" => Ok(Self::EnteredInError),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}
