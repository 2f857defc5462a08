//! References between resources.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

const HISTORY_SEGMENT: &str = "_history";

/// Resource types a reference may point to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceType {
    /// An organization.
    Organization,
    /// A task.
    Task,
    /// A process definition.
    ActivityDefinition,
    /// A network endpoint of an organization.
    Endpoint,
}

impl ResourceType {
    /// Returns the resource type name used in literal references.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Organization => "Organization",
            Self::Task => "Task",
            Self::ActivityDefinition => "ActivityDefinition",
            Self::Endpoint => "Endpoint",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ResourceType {
    type Error = TaskDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "Organization" => Ok(Self::Organization),
            "Task" => Ok(Self::Task),
            "ActivityDefinition" => Ok(Self::ActivityDefinition),
            "Endpoint" => Ok(Self::Endpoint),
            _ => Err(TaskDomainError::UnsupportedResourceType(value.to_owned())),
        }
    }
}

/// Business identifier used by logical references.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifier {
    /// Namespace of the identifier value.
    pub system: String,
    /// Identifier value.
    pub value: String,
}

impl Identifier {
    /// Creates an identifier.
    #[must_use]
    pub fn new(system: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            value: value.into(),
        }
    }
}

/// Reference from a task to another resource.
///
/// A reference is either *literal* (`Organization/org-a`, or an absolute URL
/// ending in `Organization/org-a`) or *logical* (a type plus a business
/// identifier), or both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reference {
    /// Literal reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Expected type of the target.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<ResourceType>,
    /// Business identifier of the target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,
}

impl Reference {
    /// Creates a literal reference.
    #[must_use]
    pub fn literal(reference: impl Into<String>) -> Self {
        Self {
            reference: Some(reference.into()),
            ..Self::default()
        }
    }

    /// Creates a logical reference by business identifier.
    #[must_use]
    pub fn logical(resource_type: ResourceType, identifier: Identifier) -> Self {
        Self {
            reference: None,
            resource_type: Some(resource_type),
            identifier: Some(identifier),
        }
    }

    /// Returns the parsed literal reference, if present and well formed.
    #[must_use]
    pub fn literal_target(&self) -> Option<LiteralReference> {
        self.reference.as_deref().and_then(LiteralReference::parse)
    }

    /// Returns whether neither a literal nor a logical target is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reference.as_deref().is_none_or(|value| value.trim().is_empty())
            && self.identifier.is_none()
    }
}

/// Decomposed literal reference
/// `[<base>/]<type>/<id>[/_history/<version>]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralReference {
    /// Server base for absolute references.
    pub base: Option<String>,
    /// Target resource type.
    pub resource_type: ResourceType,
    /// Target logical id.
    pub id: String,
    /// Pinned version, if any.
    pub version: Option<String>,
}

impl LiteralReference {
    /// Parses a literal reference; returns `None` when it is malformed or
    /// names an unsupported resource type.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        let segments: Vec<&str> = trimmed.split('/').collect();
        let (path, version) = match segments.as_slice() {
            [path @ .., history, version] if *history == HISTORY_SEGMENT => {
                (path, Some((*version).to_owned()))
            }
            path => (path, None),
        };
        let [base_segments @ .., type_segment, id] = path else {
            return None;
        };
        if id.is_empty() {
            return None;
        }
        let resource_type = ResourceType::try_from(*type_segment).ok()?;
        Some(Self {
            base: (!base_segments.is_empty()).then(|| base_segments.join("/")),
            resource_type,
            id: (*id).to_owned(),
            version,
        })
    }
}
