//! Organization lookups shared by the validator and the authorizer.

use crate::{
    identity::domain::{Organization, Principal},
    task::{
        domain::{Reference, ResourceType},
        ports::{ReferenceResolver, ResolvedResource},
    },
};
use tracing::{debug, warn};

/// Outcome of resolving a reference expected to name an organization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrganizationLookup {
    /// The reference resolved to an organization.
    Found(Organization),
    /// The reference resolved to a resource of another type.
    NotOrganization(ResourceType),
    /// The reference is absent, dangling, invisible to the caller, or the
    /// resolver failed.
    Unresolved,
}

/// Resolves a reference expected to name an organization.
///
/// Resolver failures are logged and reported as
/// [`OrganizationLookup::Unresolved`].
pub async fn resolve_organization<S, R>(
    resolver: &R,
    scope: &S,
    principal: &Principal,
    field: &str,
    reference: Option<&Reference>,
) -> OrganizationLookup
where
    S: Sync + ?Sized,
    R: ReferenceResolver<S> + ?Sized,
{
    let Some(target) = reference.filter(|candidate| !candidate.is_empty()) else {
        debug!(field, "reference missing");
        return OrganizationLookup::Unresolved;
    };
    match resolver
        .resolve_reference(scope, principal, target, ResourceType::Organization)
        .await
    {
        Ok(Some(ResolvedResource::Organization(organization))) => {
            OrganizationLookup::Found(organization)
        }
        Ok(Some(other)) => {
            warn!(
                field,
                resource_type = %other.resource_type(),
                "reference does not point to an organization"
            );
            OrganizationLookup::NotOrganization(other.resource_type())
        }
        Ok(None) => {
            warn!(field, user = principal.name(), "reference could not be resolved");
            OrganizationLookup::Unresolved
        }
        Err(err) => {
            warn!(field, user = principal.name(), error = %err, "reference resolution failed");
            OrganizationLookup::Unresolved
        }
    }
}

/// Returns whether the principal belongs to the organization the
/// reference names.
pub async fn is_member_of_referenced_organization<S, R>(
    resolver: &R,
    scope: &S,
    principal: &Principal,
    field: &str,
    reference: Option<&Reference>,
) -> bool
where
    S: Sync + ?Sized,
    R: ReferenceResolver<S> + ?Sized,
{
    match resolve_organization(resolver, scope, principal, field, reference).await {
        OrganizationLookup::Found(organization) => {
            organization.id() == principal.organization()
        }
        OrganizationLookup::NotOrganization(_) | OrganizationLookup::Unresolved => false,
    }
}
