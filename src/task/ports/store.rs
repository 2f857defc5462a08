//! Resource store port for task persistence and search.

use crate::task::domain::{ResourceVersion, SearchFilter, Task, TaskId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// A committed task with its storage metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredTask {
    /// Task identifier.
    pub id: TaskId,
    /// Version of this state of the task.
    pub version: ResourceVersion,
    /// When this version was committed.
    pub last_updated: DateTime<Utc>,
    /// The committed task.
    pub task: Task,
}

/// Task persistence contract.
///
/// Stores enforce single-writer-per-resource through optimistic
/// versioning: writes name the version they were based on.
#[async_trait]
pub trait TaskStore<S>: Send + Sync
where
    S: Sync + ?Sized,
{
    /// Stores a new task at [`ResourceVersion::FIRST`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the task cannot be
    /// stored.
    async fn create(&self, scope: &S, task: &Task) -> TaskStoreResult<StoredTask>;

    /// Reads the current version of a task.
    ///
    /// Returns `None` when the task does not exist.
    async fn read(&self, scope: &S, id: TaskId) -> TaskStoreResult<Option<StoredTask>>;

    /// Replaces the task, which must still be at `expected_version`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the task does not exist and
    /// [`TaskStoreError::VersionConflict`] when it was changed concurrently.
    async fn update(
        &self,
        scope: &S,
        id: TaskId,
        expected_version: ResourceVersion,
        task: &Task,
    ) -> TaskStoreResult<StoredTask>;

    /// Deletes the task, which must still be at `expected_version`, and
    /// returns its last state.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the task does not exist and
    /// [`TaskStoreError::VersionConflict`] when it was changed concurrently.
    async fn delete(
        &self,
        scope: &S,
        id: TaskId,
        expected_version: ResourceVersion,
    ) -> TaskStoreResult<StoredTask>;

    /// Returns all tasks matching the filter.
    async fn search(&self, scope: &S, filter: &SearchFilter) -> TaskStoreResult<Vec<StoredTask>>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The task changed since the version the write was based on.
    #[error("task {id} is at version {actual}, expected {expected}")]
    VersionConflict {
        /// Task identifier.
        id: TaskId,
        /// Version the write was based on.
        expected: ResourceVersion,
        /// Current version.
        actual: ResourceVersion,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
