//! Domain model for exchanged tasks.
//!
//! The task is a plain data record mirroring the exchanged resource: every
//! element is optional on the wire, and validity is decided by
//! [`crate::task::validation`] rather than by construction.

mod error;
mod ids;
mod parameter;
mod reference;
mod search;
mod status;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{ResourceVersion, TaskId};
pub use parameter::{
    BPMN_MESSAGE_NAME_CODE, BPMN_MESSAGE_SYSTEM, CodeableConcept, Coding, ParameterComponent,
    ParameterValue,
};
pub use reference::{Identifier, LiteralReference, Reference, ResourceType};
pub use search::SearchFilter;
pub use status::TaskStatus;
pub use task::{Restriction, Task};
