//! In-memory adapters for tests and single-process deployments.

mod notifier;
mod resolver;
mod store;

pub use notifier::{BroadcastChangeNotifier, SubscriberRegistry};
pub use resolver::InMemoryReferenceResolver;
pub use store::InMemoryTaskStore;

/// Scope marker for in-memory adapters, which need no transaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryScope;
