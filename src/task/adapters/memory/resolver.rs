//! In-memory reference resolver backed by the organization directory.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::{
    config::NodeConfig,
    identity::{
        domain::{OrganizationId, Principal},
        ports::OrganizationDirectory,
    },
    task::{
        domain::{Identifier, LiteralReference, Reference, ResourceType},
        ports::{ReferenceResolver, ResolveError, ResolveResult, ResolvedResource},
    },
};

/// Resolves references against a directory and a registry of other
/// resources.
///
/// Absolute literal references resolve only when their base is this node's
/// server base. Only recognized local or remote users see any resource.
pub struct InMemoryReferenceResolver<D> {
    directory: Arc<D>,
    server_base: String,
    resources: Arc<RwLock<HashSet<(ResourceType, String)>>>,
}

impl<D> Clone for InMemoryReferenceResolver<D> {
    fn clone(&self) -> Self {
        Self {
            directory: Arc::clone(&self.directory),
            server_base: self.server_base.clone(),
            resources: Arc::clone(&self.resources),
        }
    }
}

impl<D> InMemoryReferenceResolver<D>
where
    D: OrganizationDirectory,
{
    /// Creates a resolver for the node described by `config`.
    #[must_use]
    pub fn new(directory: Arc<D>, config: &NodeConfig) -> Self {
        Self {
            directory,
            server_base: config.server_base().to_owned(),
            resources: Arc::default(),
        }
    }

    /// Registers a non-organization resource so references to it resolve.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Unavailable`] when the registry lock is
    /// poisoned.
    pub fn register(
        &self,
        resource_type: ResourceType,
        id: impl Into<String>,
    ) -> ResolveResult<()> {
        let mut resources = self
            .resources
            .write()
            .map_err(|err| ResolveError::unavailable(std::io::Error::other(err.to_string())))?;
        resources.insert((resource_type, id.into()));
        Ok(())
    }

    fn resolve_literal(
        &self,
        target: LiteralReference,
    ) -> ResolveResult<Option<ResolvedResource>> {
        if target
            .base
            .as_deref()
            .is_some_and(|base| base.trim_end_matches('/') != self.server_base)
        {
            return Ok(None);
        }
        if target.resource_type == ResourceType::Organization {
            return Ok(OrganizationId::new(target.id)
                .ok()
                .and_then(|id| self.directory.find_by_id(&id))
                .map(ResolvedResource::Organization));
        }
        let resources = self
            .resources
            .read()
            .map_err(|err| ResolveError::unavailable(std::io::Error::other(err.to_string())))?;
        let key = (target.resource_type, target.id);
        Ok(resources
            .contains(&key)
            .then(|| ResolvedResource::Other {
                resource_type: key.0,
                id: key.1.clone(),
            }))
    }

    fn resolve_logical(
        &self,
        resource_type: ResourceType,
        identifier: &Identifier,
    ) -> Option<ResolvedResource> {
        if resource_type != ResourceType::Organization {
            return None;
        }
        self.directory
            .find_by_identifier(&identifier.system, &identifier.value)
            .map(ResolvedResource::Organization)
    }
}

#[async_trait]
impl<S, D> ReferenceResolver<S> for InMemoryReferenceResolver<D>
where
    S: Sync + ?Sized,
    D: OrganizationDirectory,
{
    async fn resolve_reference(
        &self,
        _scope: &S,
        principal: &Principal,
        reference: &Reference,
        expected: ResourceType,
    ) -> ResolveResult<Option<ResolvedResource>> {
        if !self.directory.is_local_user(principal) && !self.directory.is_remote_user(principal) {
            return Ok(None);
        }
        if reference.reference.is_some() {
            return reference
                .literal_target()
                .map_or(Ok(None), |target| self.resolve_literal(target));
        }
        Ok(reference.identifier.as_ref().and_then(|identifier| {
            self.resolve_logical(reference.resource_type.unwrap_or(expected), identifier)
        }))
    }
}
