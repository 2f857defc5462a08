//! Typed input and output parameters of a task.

use super::Reference;
use serde::{Deserialize, Serialize};

/// Code system tagging BPMN message parameters.
pub const BPMN_MESSAGE_SYSTEM: &str = "http://highmed.org/fhir/CodeSystem/bpmn-message";

/// Code of the parameter carrying the message name.
pub const BPMN_MESSAGE_NAME_CODE: &str = "message-name";

/// A code from a code system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coding {
    /// Code system URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    /// Code within the system.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl Coding {
    /// Creates a coding from its system and code.
    #[must_use]
    pub fn new(system: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            system: Some(system.into()),
            code: Some(code.into()),
        }
    }

    /// Returns whether this coding has the given system and code.
    #[must_use]
    pub fn is(&self, system: &str, code: &str) -> bool {
        self.system.as_deref() == Some(system) && self.code.as_deref() == Some(code)
    }
}

/// A concept expressed by one or more codings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CodeableConcept {
    /// Codings of the concept.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub coding: Vec<Coding>,
}

impl CodeableConcept {
    /// Creates a concept with a single coding.
    #[must_use]
    pub fn from_coding(coding: Coding) -> Self {
        Self {
            coding: vec![coding],
        }
    }

    /// Returns whether any coding has the given system and code.
    #[must_use]
    pub fn has_coding(&self, system: &str, code: &str) -> bool {
        self.coding.iter().any(|coding| coding.is(system, code))
    }
}

/// Typed value of a parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterValue {
    /// A string value.
    String(String),
    /// A boolean value.
    Boolean(bool),
    /// An integer value.
    Integer(i64),
    /// A reference value.
    Reference(Reference),
}

/// One typed key/value entry of `Task.input` or `Task.output`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParameterComponent {
    /// Key of the entry.
    #[serde(rename = "type")]
    pub kind: CodeableConcept,
    /// Value of the entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<ParameterValue>,
}

impl ParameterComponent {
    /// Creates an entry keyed by the given coding.
    #[must_use]
    pub fn new(kind: Coding, value: ParameterValue) -> Self {
        Self {
            kind: CodeableConcept::from_coding(kind),
            value: Some(value),
        }
    }

    /// Creates the BPMN `message-name` entry.
    #[must_use]
    pub fn message_name(name: impl Into<String>) -> Self {
        Self::new(
            Coding::new(BPMN_MESSAGE_SYSTEM, BPMN_MESSAGE_NAME_CODE),
            ParameterValue::String(name.into()),
        )
    }

    /// Returns the message name carried by this entry: the entry must be
    /// tagged `bpmn-message`/`message-name` and hold a non-blank string.
    #[must_use]
    pub fn as_message_name(&self) -> Option<&str> {
        if !self
            .kind
            .has_coding(BPMN_MESSAGE_SYSTEM, BPMN_MESSAGE_NAME_CODE)
        {
            return None;
        }
        match &self.value {
            Some(ParameterValue::String(name)) if !name.trim().is_empty() => Some(name),
            _ => None,
        }
    }
}
