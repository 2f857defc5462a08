//! Capability trait implemented per resource kind.

use super::{AuthorizationDecision, SearchAuthorization};
use crate::identity::domain::Principal;
use async_trait::async_trait;

/// Authorizes lifecycle operations on one kind of resource.
///
/// Every method runs inside the caller-supplied scope `S`: all collaborator
/// lookups of one decision read through it, and implementations never begin
/// or commit transactions.
#[async_trait]
pub trait LifecycleAuthorizer<S>: Send + Sync
where
    S: Sync + ?Sized,
{
    /// Resource kind this authorizer governs.
    type Resource: Send + Sync;

    /// Authorizes creation of `resource`.
    async fn authorize_create(
        &self,
        scope: &S,
        principal: &Principal,
        resource: &Self::Resource,
    ) -> AuthorizationDecision;

    /// Authorizes a read of the persisted `resource`.
    async fn authorize_read(
        &self,
        scope: &S,
        principal: &Principal,
        resource: &Self::Resource,
    ) -> AuthorizationDecision;

    /// Authorizes replacing `old` with `new`.
    async fn authorize_update(
        &self,
        scope: &S,
        principal: &Principal,
        old: &Self::Resource,
        new: &Self::Resource,
    ) -> AuthorizationDecision;

    /// Authorizes deletion of the persisted `old`.
    async fn authorize_delete(
        &self,
        scope: &S,
        principal: &Principal,
        old: &Self::Resource,
    ) -> AuthorizationDecision;

    /// Authorizes a search; never denies, but returns the filter results
    /// must be restricted by.
    async fn authorize_search(&self, scope: &S, principal: &Principal) -> SearchAuthorization;
}
