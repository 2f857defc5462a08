//! Update branches and the status transition table.

use crate::task::domain::TaskStatus;

/// Which update authorization path applies to a caller and stored task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateBranch {
    /// Revision of a draft by a member of the requester organization.
    DraftRevision,
    /// Status transition driven by a local member of the recipient
    /// organization.
    RecipientTransition,
    /// Neither path applies.
    Ineligible,
}

impl UpdateBranch {
    /// Selects the branch from the stored status and the caller's
    /// relationship to the stored task.
    #[must_use]
    pub const fn select(
        old_status: Option<TaskStatus>,
        requester_member: bool,
        local_recipient_member: bool,
    ) -> Self {
        match (old_status, requester_member, local_recipient_member) {
            (Some(TaskStatus::Draft), true, _) => Self::DraftRevision,
            (Some(TaskStatus::Requested | TaskStatus::InProgress), _, true) => {
                Self::RecipientTransition
            }
            _ => Self::Ineligible,
        }
    }
}

/// Verdict on a recipient-driven status transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionRule {
    /// The transition is permitted.
    Allowed,
    /// The transition is known but the task carries output it must not
    /// have yet.
    OutputNotExpected,
    /// The transition is not part of the lifecycle.
    NotAllowed,
}

impl TransitionRule {
    /// Evaluates the transition from `old` to `new`.
    ///
    /// `Requested → InProgress` requires an empty output;
    /// `InProgress → Completed | Failed` accepts any output.
    #[must_use]
    pub const fn evaluate(
        old: Option<TaskStatus>,
        new: Option<TaskStatus>,
        output_empty: bool,
    ) -> Self {
        match (old, new) {
            (Some(TaskStatus::Requested), Some(TaskStatus::InProgress)) if output_empty => {
                Self::Allowed
            }
            (Some(TaskStatus::Requested), Some(TaskStatus::InProgress)) => Self::OutputNotExpected,
            (
                Some(TaskStatus::InProgress),
                Some(TaskStatus::Completed | TaskStatus::Failed),
            ) => Self::Allowed,
            _ => Self::NotAllowed,
        }
    }
}
