//! Violation values reported by the structural validator.

use crate::task::domain::{BPMN_MESSAGE_NAME_CODE, BPMN_MESSAGE_SYSTEM, TaskStatus};
use std::fmt;

/// One way a candidate task violates the task invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskViolation {
    /// `status` is absent.
    StatusMissing,
    /// `status` is neither draft nor requested.
    StatusNotIssuable(TaskStatus),
    /// `requester` is absent.
    RequesterMissing,
    /// The caller is not a member of the requester organization.
    RequesterNotCallerOrganization,
    /// `restriction` is absent.
    RestrictionMissing,
    /// `restriction.recipient` is absent or names more than one target.
    RecipientCount(usize),
    /// `restriction.recipient` could not be resolved.
    RecipientUnresolved,
    /// `restriction.recipient` resolved to something other than an
    /// organization.
    RecipientNotOrganization,
    /// `restriction.recipient` is not an organization hosted by this node.
    RecipientNotLocal,
    /// `instantiatesUri` is absent.
    InstantiatesUriMissing,
    /// `instantiatesUri` does not follow the process-URI grammar.
    InstantiatesUriMalformed(String),
    /// `input` is empty.
    InputMissing,
    /// `input` does not hold exactly one non-blank message name.
    MessageNameCount(usize),
    /// `output` is not empty.
    OutputNotEmpty,
}

impl fmt::Display for TaskViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StatusMissing => f.write_str("task.status missing"),
            Self::StatusNotIssuable(status) => {
                write!(f, "task.status {status} not draft or requested")
            }
            Self::RequesterMissing => f.write_str("task.requester missing"),
            Self::RequesterNotCallerOrganization => {
                f.write_str("task.requester user not part of referenced organization")
            }
            Self::RestrictionMissing => f.write_str("task.restriction missing"),
            Self::RecipientCount(0) => f.write_str("task.restriction.recipient missing"),
            Self::RecipientCount(count) => write!(
                f,
                "task.restriction.recipient more than one ({count} references)"
            ),
            Self::RecipientUnresolved => {
                f.write_str("task.restriction.recipient could not be resolved")
            }
            Self::RecipientNotOrganization => {
                f.write_str("task.restriction.recipient not an organization")
            }
            Self::RecipientNotLocal => {
                f.write_str("task.restriction.recipient not local organization")
            }
            Self::InstantiatesUriMissing => f.write_str("task.instantiatesUri missing"),
            Self::InstantiatesUriMalformed(reason) => write!(
                f,
                "task.instantiatesUri not matching <base>/bpe/Process/<name>/<major>.<minor>.<patch>: {reason}"
            ),
            Self::InputMissing => f.write_str("task.input empty"),
            Self::MessageNameCount(0) => write!(
                f,
                "task.input with system {BPMN_MESSAGE_SYSTEM} and code {BPMN_MESSAGE_NAME_CODE} with non-blank string value missing"
            ),
            Self::MessageNameCount(count) => write!(
                f,
                "task.input with system {BPMN_MESSAGE_SYSTEM} and code {BPMN_MESSAGE_NAME_CODE} more than one ({count} entries)"
            ),
            Self::OutputNotEmpty => f.write_str("task.output not empty"),
        }
    }
}

/// All violations found for one candidate task, in check order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViolationList(Vec<TaskViolation>);

impl ViolationList {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Records a violation.
    pub fn push(&mut self, violation: TaskViolation) {
        self.0.push(violation);
    }

    /// Records a violation if present.
    pub fn extend_from(&mut self, violation: Option<TaskViolation>) {
        self.0.extend(violation);
    }

    /// Returns whether no violation was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the list contains the violation.
    #[must_use]
    pub fn contains(&self, violation: &TaskViolation) -> bool {
        self.0.contains(violation)
    }

    /// Returns the violations as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[TaskViolation] {
        &self.0
    }
}

impl fmt::Display for ViolationList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, violation) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl IntoIterator for ViolationList {
    type Item = TaskViolation;
    type IntoIter = std::vec::IntoIter<TaskViolation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
