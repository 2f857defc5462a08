//! In-memory change notifiers.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use tokio::sync::broadcast;
use tracing::{debug, warn};

use crate::task::ports::{ChangeNotifier, ResourceHandler, SubscriptionError, TaskChange};

/// Delivers each committed change to every registered handler, in
/// registration order.
#[derive(Clone, Default)]
pub struct SubscriberRegistry {
    handlers: Arc<RwLock<Vec<Arc<dyn ResourceHandler>>>>,
}

impl SubscriberRegistry {
    /// Creates a registry without handlers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler for all subsequent changes.
    ///
    /// # Errors
    ///
    /// Returns [`SubscriptionError::Unavailable`] when the registry lock is
    /// poisoned.
    pub fn subscribe(&self, handler: Arc<dyn ResourceHandler>) -> Result<(), SubscriptionError> {
        let mut handlers = self.handlers.write().map_err(|err| {
            SubscriptionError::unavailable(std::io::Error::other(err.to_string()))
        })?;
        handlers.push(handler);
        Ok(())
    }

    /// Returns the number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.read().map_or(0, |handlers| handlers.len())
    }

    /// Returns whether no handler is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ChangeNotifier for SubscriberRegistry {
    async fn notify(&self, change: &TaskChange) {
        let handlers = match self.handlers.read() {
            Ok(registered) => registered.clone(),
            Err(err) => {
                warn!(error = %err, "subscriber registry unavailable, change not delivered");
                return;
            }
        };
        debug!(
            kind = %change.kind,
            task = %change.task.id,
            subscribers = handlers.len(),
            "delivering task change"
        );
        for handler in handlers {
            handler.on_resource(change);
        }
    }
}

/// Publishes committed changes on a tokio broadcast channel.
///
/// Receivers that lag behind the channel capacity miss the oldest changes.
#[derive(Debug, Clone)]
pub struct BroadcastChangeNotifier {
    sender: broadcast::Sender<TaskChange>,
}

impl BroadcastChangeNotifier {
    /// Creates a notifier buffering up to `capacity` changes per receiver.
    ///
    /// A zero capacity is raised to one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Returns a receiver for changes published after this call.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<TaskChange> {
        self.sender.subscribe()
    }
}

#[async_trait]
impl ChangeNotifier for BroadcastChangeNotifier {
    async fn notify(&self, change: &TaskChange) {
        match self.sender.send(change.clone()) {
            Ok(receivers) => debug!(
                kind = %change.kind,
                task = %change.task.id,
                receivers,
                "task change published"
            ),
            Err(_) => debug!(
                kind = %change.kind,
                task = %change.task.id,
                "no receivers for task change"
            ),
        }
    }
}
