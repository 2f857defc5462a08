//! Detection of changes to fields that are immutable across transitions.

use crate::task::domain::Task;
use std::fmt;

/// A task field whose value differs between the stored and the proposed
/// version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangedField {
    /// `requester` differs.
    Requester,
    /// `restriction` differs.
    Restriction,
    /// `instantiatesUri` differs.
    InstantiatesUri,
    /// `input` has a different number of entries.
    Input,
    /// The input entry at the given index differs.
    InputAt(usize),
}

impl fmt::Display for ChangedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Requester => f.write_str("task.requester"),
            Self::Restriction => f.write_str("task.restriction"),
            Self::InstantiatesUri => f.write_str("task.instantiatesUri"),
            Self::Input => f.write_str("task.input"),
            Self::InputAt(index) => write!(f, "task.input[{index}]"),
        }
    }
}

/// Lists the immutable fields that differ between `old` and `new`.
///
/// Fields are compared in the order requester, restriction,
/// `instantiatesUri`, input. For `input` only the first differing entry is
/// reported.
///
/// # Examples
///
/// ```
/// use taskgate::task::{
///     domain::{Reference, Task},
///     validation::{ChangedField, diff_immutable_fields},
/// };
///
/// let old = Task::default().with_requester(Reference::literal("Organization/a"));
/// let new = Task::default().with_requester(Reference::literal("Organization/b"));
/// assert_eq!(diff_immutable_fields(&old, &new), vec![ChangedField::Requester]);
/// ```
#[must_use]
pub fn diff_immutable_fields(old: &Task, new: &Task) -> Vec<ChangedField> {
    let mut changed = Vec::new();
    if old.requester != new.requester {
        changed.push(ChangedField::Requester);
    }
    if old.restriction != new.restriction {
        changed.push(ChangedField::Restriction);
    }
    if old.instantiates_uri != new.instantiates_uri {
        changed.push(ChangedField::InstantiatesUri);
    }
    if old.input.len() == new.input.len() {
        if let Some(index) = old
            .input
            .iter()
            .zip(&new.input)
            .position(|(before, after)| before != after)
        {
            changed.push(ChangedField::InputAt(index));
        }
    } else {
        changed.push(ChangedField::Input);
    }
    changed
}
