//! Change notification port.

use super::StoredTask;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Kind of committed change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// A task was created.
    Created,
    /// A task was updated.
    Updated,
    /// A task was deleted.
    Deleted,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
        })
    }
}

/// A committed change to a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskChange {
    /// What happened.
    pub kind: ChangeKind,
    /// State of the task after the change; for deletions, its last state.
    pub task: StoredTask,
}

/// Delivers committed changes to subscribers.
///
/// Called once per committed change, after the commit.
#[async_trait]
pub trait ChangeNotifier: Send + Sync {
    /// Delivers the change to every interested subscriber.
    async fn notify(&self, change: &TaskChange);
}

/// Errors returned while registering subscribers.
#[derive(Debug, Clone, Error)]
pub enum SubscriptionError {
    /// The subscriber registry failed.
    #[error("subscriber registry unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl SubscriptionError {
    /// Wraps a registry failure.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}

/// Subscriber receiving committed task changes.
pub trait ResourceHandler: Send + Sync {
    /// Handles one committed change.
    fn on_resource(&self, change: &TaskChange);
}
