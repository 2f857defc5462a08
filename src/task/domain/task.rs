//! The task resource.

use super::{ParameterComponent, Reference, TaskStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Restriction on who may act on a task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restriction {
    /// Receiving organizations; a valid task names exactly one.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recipient: Vec<Reference>,
    /// How many times the task may be performed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repetitions: Option<u32>,
}

impl Restriction {
    /// Creates a restriction naming a single recipient.
    #[must_use]
    pub fn to_recipient(recipient: Reference) -> Self {
        Self {
            recipient: vec![recipient],
            repetitions: None,
        }
    }
}

/// A message exchanged between organizations to drive a process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Lifecycle status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    /// Process and version the task triggers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instantiates_uri: Option<String>,
    /// Issuing organization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requester: Option<Reference>,
    /// Receiving organization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restriction: Option<Restriction>,
    /// When the requester authored the task.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authored_on: Option<DateTime<Utc>>,
    /// Input parameters, including the message name.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub input: Vec<ParameterComponent>,
    /// Output parameters, set on completion or failure.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub output: Vec<ParameterComponent>,
}

impl Task {
    /// Sets the status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the `instantiatesUri`.
    #[must_use]
    pub fn with_instantiates_uri(mut self, uri: impl Into<String>) -> Self {
        self.instantiates_uri = Some(uri.into());
        self
    }

    /// Sets the requester.
    #[must_use]
    pub fn with_requester(mut self, requester: Reference) -> Self {
        self.requester = Some(requester);
        self
    }

    /// Sets a restriction naming a single recipient.
    #[must_use]
    pub fn with_recipient(mut self, recipient: Reference) -> Self {
        self.restriction = Some(Restriction::to_recipient(recipient));
        self
    }

    /// Appends an input parameter.
    #[must_use]
    pub fn with_input(mut self, input: ParameterComponent) -> Self {
        self.input.push(input);
        self
    }

    /// Appends an output parameter.
    #[must_use]
    pub fn with_output(mut self, output: ParameterComponent) -> Self {
        self.output.push(output);
        self
    }

    /// Returns the recipient references, empty when no restriction is set.
    #[must_use]
    pub fn recipients(&self) -> &[Reference] {
        self.restriction
            .as_ref()
            .map(|restriction| restriction.recipient.as_slice())
            .unwrap_or_default()
    }

    /// Returns the single recipient reference, if exactly one is set.
    #[must_use]
    pub fn single_recipient(&self) -> Option<&Reference> {
        match self.recipients() {
            [recipient] => Some(recipient),
            _ => None,
        }
    }

    /// Returns all valid message names found in `input`.
    pub fn message_names(&self) -> impl Iterator<Item = &str> {
        self.input
            .iter()
            .filter_map(ParameterComponent::as_message_name)
    }

    /// Returns the message name when `input` holds exactly one valid
    /// message-name entry.
    #[must_use]
    pub fn single_message_name(&self) -> Option<&str> {
        let mut names = self.message_names();
        match (names.next(), names.next()) {
            (Some(name), None) => Some(name),
            _ => None,
        }
    }
}
