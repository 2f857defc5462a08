//! Lifecycle authorization engine for tasks.
//!
//! The engine decides, for each attempted operation on a task, whether the
//! acting principal is permitted. Decisions are values: collaborator
//! failures become denials, and nothing is mutated besides log output.

pub mod authorizer;
pub mod decision;
pub mod formatter;
pub mod membership;
pub mod process_access;
pub mod task_rule;
pub mod transition;

pub use authorizer::LifecycleAuthorizer;
pub use decision::{AuthorizationDecision, SearchAuthorization, TaskOperation};
pub use formatter::{JsonTaskFormatter, TaskFormatter};
pub use process_access::is_process_allowed;
pub use task_rule::TaskAuthorizer;
pub use transition::{TransitionRule, UpdateBranch};
