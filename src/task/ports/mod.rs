//! Port contracts for task authorization and persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the
//! authorization engine and the access service. Scope-aware ports are
//! generic over the caller-supplied snapshot `S` so every lookup of one
//! decision observes the same view of the data store.

pub mod notifier;
pub mod resolver;
pub mod store;

pub use notifier::{
    ChangeKind, ChangeNotifier, ResourceHandler, SubscriptionError, TaskChange,
};
pub use resolver::{ReferenceResolver, ResolveError, ResolveResult, ResolvedResource};
pub use store::{StoredTask, TaskStore, TaskStoreError, TaskStoreResult};
