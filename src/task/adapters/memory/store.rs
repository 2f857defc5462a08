//! In-memory task store with optimistic versioning.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use mockable::Clock;

use crate::task::{
    domain::{ResourceVersion, SearchFilter, Task, TaskId},
    ports::{StoredTask, TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store.
pub struct InMemoryTaskStore<C> {
    state: Arc<RwLock<HashMap<TaskId, StoredTask>>>,
    clock: Arc<C>,
}

impl<C> Clone for InMemoryTaskStore<C> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C> InMemoryTaskStore<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty store stamping versions with `clock`.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self {
            state: Arc::default(),
            clock,
        }
    }

    fn read_state(&self) -> TaskStoreResult<RwLockReadGuard<'_, HashMap<TaskId, StoredTask>>> {
        self.state
            .read()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))
    }

    fn write_state(&self) -> TaskStoreResult<RwLockWriteGuard<'_, HashMap<TaskId, StoredTask>>> {
        self.state
            .write()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))
    }
}

/// Returns the current entry, which must be at `expected` version.
fn current_at(
    state: &HashMap<TaskId, StoredTask>,
    id: TaskId,
    expected: ResourceVersion,
) -> TaskStoreResult<&StoredTask> {
    let stored = state.get(&id).ok_or(TaskStoreError::NotFound(id))?;
    if stored.version != expected {
        return Err(TaskStoreError::VersionConflict {
            id,
            expected,
            actual: stored.version,
        });
    }
    Ok(stored)
}

#[async_trait]
impl<S, C> TaskStore<S> for InMemoryTaskStore<C>
where
    S: Sync + ?Sized,
    C: Clock + Send + Sync,
{
    async fn create(&self, _scope: &S, task: &Task) -> TaskStoreResult<StoredTask> {
        let stored = StoredTask {
            id: TaskId::new(),
            version: ResourceVersion::FIRST,
            last_updated: self.clock.utc(),
            task: task.clone(),
        };
        self.write_state()?.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn read(&self, _scope: &S, id: TaskId) -> TaskStoreResult<Option<StoredTask>> {
        Ok(self.read_state()?.get(&id).cloned())
    }

    async fn update(
        &self,
        _scope: &S,
        id: TaskId,
        expected_version: ResourceVersion,
        task: &Task,
    ) -> TaskStoreResult<StoredTask> {
        let mut state = self.write_state()?;
        let current = current_at(&state, id, expected_version)?;
        let stored = StoredTask {
            id,
            version: current.version.next(),
            last_updated: self.clock.utc(),
            task: task.clone(),
        };
        state.insert(id, stored.clone());
        Ok(stored)
    }

    async fn delete(
        &self,
        _scope: &S,
        id: TaskId,
        expected_version: ResourceVersion,
    ) -> TaskStoreResult<StoredTask> {
        let mut state = self.write_state()?;
        current_at(&state, id, expected_version)?;
        state.remove(&id).ok_or(TaskStoreError::NotFound(id))
    }

    async fn search(&self, _scope: &S, filter: &SearchFilter) -> TaskStoreResult<Vec<StoredTask>> {
        let state = self.read_state()?;
        let mut matches: Vec<StoredTask> = state
            .values()
            .filter(|stored| filter.matches(&stored.task))
            .cloned()
            .collect();
        matches.sort_by_key(|stored| (stored.last_updated, stored.id));
        Ok(matches)
    }
}
