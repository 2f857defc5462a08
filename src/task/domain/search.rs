//! Search-time visibility filter.

use super::{Reference, ResourceType, Task};
use crate::identity::domain::{OrganizationId, OrganizationIdentifier};
use serde::{Deserialize, Serialize};

/// Restricts a result set to tasks whose requester or recipient is the
/// caller's organization.
///
/// Relative literal references always name this node's resources. Absolute
/// ones match only when their base is the filter's server base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilter {
    organization: OrganizationId,
    identifier: Option<OrganizationIdentifier>,
    server_base: Option<String>,
}

impl SearchFilter {
    /// Creates a filter for the given organization.
    #[must_use]
    pub const fn for_organization(organization: OrganizationId) -> Self {
        Self {
            organization,
            identifier: None,
            server_base: None,
        }
    }

    /// Also matches logical references carrying this business identifier.
    #[must_use]
    pub fn with_identifier(mut self, identifier: OrganizationIdentifier) -> Self {
        self.identifier = Some(identifier);
        self
    }

    /// Also matches absolute literal references under this server base.
    #[must_use]
    pub fn with_server_base(mut self, server_base: &str) -> Self {
        self.server_base = Some(server_base.trim_end_matches('/').to_owned());
        self
    }

    /// Returns the organization results are restricted to.
    #[must_use]
    pub const fn organization(&self) -> &OrganizationId {
        &self.organization
    }

    /// Returns whether the task's requester or recipient is the filter's
    /// organization.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        task.requester
            .iter()
            .chain(task.recipients())
            .any(|reference| self.matches_reference(reference))
    }

    fn matches_reference(&self, reference: &Reference) -> bool {
        let literal_match = reference.literal_target().is_some_and(|target| {
            target.resource_type == ResourceType::Organization
                && target.id == self.organization.as_str()
                && target.base.as_deref().is_none_or(|base| {
                    self.server_base.as_deref() == Some(base.trim_end_matches('/'))
                })
        });
        let logical_match = match (&self.identifier, &reference.identifier) {
            (Some(expected), Some(actual)) => expected.matches(&actual.system, &actual.value),
            _ => false,
        };
        literal_match || logical_match
    }
}
