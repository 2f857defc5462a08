//! Individual validation rules that need no collaborator lookups.
//!
//! Each rule is a pure function inspecting one element of a candidate task
//! and returning the violation it found, if any.

use crate::{
    process::domain::ProcessUri,
    task::{domain::Task, validation::TaskViolation},
};

/// Validates that `status` is present and draft or requested.
#[must_use]
pub fn check_status(task: &Task) -> Option<TaskViolation> {
    match task.status {
        None => Some(TaskViolation::StatusMissing),
        Some(status) if !status.is_issuable() => Some(TaskViolation::StatusNotIssuable(status)),
        Some(_) => None,
    }
}

/// Validates that `instantiatesUri` is present and well formed.
#[must_use]
pub fn check_instantiates_uri(task: &Task) -> Option<TaskViolation> {
    let Some(uri) = task.instantiates_uri.as_deref() else {
        return Some(TaskViolation::InstantiatesUriMissing);
    };
    ProcessUri::parse(uri)
        .err()
        .map(|err| TaskViolation::InstantiatesUriMalformed(err.to_string()))
}

/// Validates that `input` holds exactly one non-blank message name.
#[must_use]
pub fn check_message_name(task: &Task) -> Option<TaskViolation> {
    if task.input.is_empty() {
        return Some(TaskViolation::InputMissing);
    }
    match task.message_names().count() {
        1 => None,
        count => Some(TaskViolation::MessageNameCount(count)),
    }
}

/// Validates that `output` is empty.
#[must_use]
pub fn check_output_empty(task: &Task) -> Option<TaskViolation> {
    (!task.output.is_empty()).then_some(TaskViolation::OutputNotEmpty)
}

/// Validates the shape of `restriction.recipient` and returns the violation
/// if it does not name exactly one target.
#[must_use]
pub fn check_recipient_count(task: &Task) -> Option<TaskViolation> {
    match &task.restriction {
        None => Some(TaskViolation::RestrictionMissing),
        Some(restriction) if restriction.recipient.len() != 1 => {
            Some(TaskViolation::RecipientCount(restriction.recipient.len()))
        }
        Some(_) => None,
    }
}
