//! Service gating every task operation behind the lifecycle authorizer.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::{
    identity::domain::Principal,
    task::{
        authorization::{AuthorizationDecision, LifecycleAuthorizer},
        domain::{ResourceVersion, Task, TaskId},
        ports::{ChangeKind, ChangeNotifier, StoredTask, TaskChange, TaskStore, TaskStoreError},
    },
};

/// Service-level errors for task access.
///
/// Denials carry no detail; the reason is only logged by the authorizer.
#[derive(Debug, Error)]
pub enum TaskAccessError {
    /// The caller may not perform the operation.
    #[error("forbidden")]
    Forbidden,
    /// The task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// The store rejected the operation.
    #[error(transparent)]
    Store(TaskStoreError),
}

impl From<TaskStoreError> for TaskAccessError {
    fn from(err: TaskStoreError) -> Self {
        match err {
            TaskStoreError::NotFound(id) => Self::NotFound(id),
            other => Self::Store(other),
        }
    }
}

/// Result type for task access operations.
pub type TaskAccessResult<T> = Result<T, TaskAccessError>;

/// Authorizes, commits and publishes task operations.
///
/// An operation is first authorized; only on allow does the store commit,
/// after which the notifier receives the committed state exactly once.
pub struct TaskAccessService<A, T, N> {
    authorizer: Arc<A>,
    store: Arc<T>,
    notifier: Arc<N>,
}

impl<A, T, N> Clone for TaskAccessService<A, T, N> {
    fn clone(&self) -> Self {
        Self {
            authorizer: Arc::clone(&self.authorizer),
            store: Arc::clone(&self.store),
            notifier: Arc::clone(&self.notifier),
        }
    }
}

impl<A, T, N> TaskAccessService<A, T, N>
where
    N: ChangeNotifier,
{
    /// Creates a new task access service.
    #[must_use]
    pub const fn new(authorizer: Arc<A>, store: Arc<T>, notifier: Arc<N>) -> Self {
        Self {
            authorizer,
            store,
            notifier,
        }
    }

    /// Creates a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskAccessError::Forbidden`] when the authorizer denies the
    /// operation and [`TaskAccessError::Store`] when the store fails.
    pub async fn create<S>(
        &self,
        scope: &S,
        principal: &Principal,
        task: &Task,
    ) -> TaskAccessResult<StoredTask>
    where
        S: Sync + ?Sized,
        A: LifecycleAuthorizer<S, Resource = Task>,
        T: TaskStore<S>,
    {
        ensure_allowed(&self.authorizer.authorize_create(scope, principal, task).await)?;
        let stored = self.store.create(scope, task).await?;
        self.publish(ChangeKind::Created, &stored).await;
        Ok(stored)
    }

    /// Reads a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskAccessError::NotFound`] when the task does not exist and
    /// [`TaskAccessError::Forbidden`] when the caller may not see it.
    pub async fn read<S>(
        &self,
        scope: &S,
        principal: &Principal,
        id: TaskId,
    ) -> TaskAccessResult<StoredTask>
    where
        S: Sync + ?Sized,
        A: LifecycleAuthorizer<S, Resource = Task>,
        T: TaskStore<S>,
    {
        let stored = self.current(scope, id).await?;
        ensure_allowed(
            &self
                .authorizer
                .authorize_read(scope, principal, &stored.task)
                .await,
        )?;
        Ok(stored)
    }

    /// Replaces a task that must still be at `expected_version`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskAccessError::NotFound`] when the task does not exist,
    /// [`TaskAccessError::Forbidden`] when the update is not authorized, and
    /// [`TaskAccessError::Store`] on version conflicts or store failures.
    pub async fn update<S>(
        &self,
        scope: &S,
        principal: &Principal,
        id: TaskId,
        expected_version: ResourceVersion,
        task: &Task,
    ) -> TaskAccessResult<StoredTask>
    where
        S: Sync + ?Sized,
        A: LifecycleAuthorizer<S, Resource = Task>,
        T: TaskStore<S>,
    {
        let current = self.current(scope, id).await?;
        ensure_allowed(
            &self
                .authorizer
                .authorize_update(scope, principal, &current.task, task)
                .await,
        )?;
        let stored = self.store.update(scope, id, expected_version, task).await?;
        self.publish(ChangeKind::Updated, &stored).await;
        Ok(stored)
    }

    /// Deletes a task that must still be at `expected_version`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskAccessError::NotFound`] when the task does not exist,
    /// [`TaskAccessError::Forbidden`] when deletion is not authorized, and
    /// [`TaskAccessError::Store`] on version conflicts or store failures.
    pub async fn delete<S>(
        &self,
        scope: &S,
        principal: &Principal,
        id: TaskId,
        expected_version: ResourceVersion,
    ) -> TaskAccessResult<StoredTask>
    where
        S: Sync + ?Sized,
        A: LifecycleAuthorizer<S, Resource = Task>,
        T: TaskStore<S>,
    {
        let current = self.current(scope, id).await?;
        ensure_allowed(
            &self
                .authorizer
                .authorize_delete(scope, principal, &current.task)
                .await,
        )?;
        let deleted = self.store.delete(scope, id, expected_version).await?;
        self.publish(ChangeKind::Deleted, &deleted).await;
        Ok(deleted)
    }

    /// Returns the tasks visible to the caller's organization.
    ///
    /// # Errors
    ///
    /// Returns [`TaskAccessError::Store`] when the store fails.
    pub async fn search<S>(
        &self,
        scope: &S,
        principal: &Principal,
    ) -> TaskAccessResult<Vec<StoredTask>>
    where
        S: Sync + ?Sized,
        A: LifecycleAuthorizer<S, Resource = Task>,
        T: TaskStore<S>,
    {
        let authorization = self.authorizer.authorize_search(scope, principal).await;
        Ok(self.store.search(scope, authorization.filter()).await?)
    }

    async fn current<S>(&self, scope: &S, id: TaskId) -> TaskAccessResult<StoredTask>
    where
        S: Sync + ?Sized,
        T: TaskStore<S>,
    {
        self.store
            .read(scope, id)
            .await?
            .ok_or(TaskAccessError::NotFound(id))
    }

    async fn publish(&self, kind: ChangeKind, task: &StoredTask) {
        debug!(%kind, task = %task.id, version = %task.version, "task change committed");
        self.notifier
            .notify(&TaskChange {
                kind,
                task: task.clone(),
            })
            .await;
    }
}

const fn ensure_allowed(decision: &AuthorizationDecision) -> TaskAccessResult<()> {
    if decision.is_allowed() {
        Ok(())
    } else {
        Err(TaskAccessError::Forbidden)
    }
}
