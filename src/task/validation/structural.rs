//! Structural validator for candidate tasks.

use std::sync::Arc;

use crate::{
    identity::{domain::Principal, ports::OrganizationDirectory},
    task::{
        authorization::membership::{
            OrganizationLookup, is_member_of_referenced_organization, resolve_organization,
        },
        domain::Task,
        ports::ReferenceResolver,
        validation::{TaskViolation, ViolationList, rules},
    },
};

/// Checks a candidate task against the invariants a task must satisfy when
/// it is created or redrafted.
///
/// Every rule runs regardless of earlier failures; the returned list is
/// empty exactly when the task is valid.
pub struct StructuralValidator<D, R> {
    directory: Arc<D>,
    resolver: Arc<R>,
}

impl<D, R> Clone for StructuralValidator<D, R> {
    fn clone(&self) -> Self {
        Self {
            directory: Arc::clone(&self.directory),
            resolver: Arc::clone(&self.resolver),
        }
    }
}

impl<D, R> StructuralValidator<D, R>
where
    D: OrganizationDirectory,
{
    /// Creates a validator.
    #[must_use]
    pub const fn new(directory: Arc<D>, resolver: Arc<R>) -> Self {
        Self {
            directory,
            resolver,
        }
    }

    /// Validates a candidate task on behalf of the principal.
    pub async fn validate<S>(&self, scope: &S, principal: &Principal, task: &Task) -> ViolationList
    where
        S: Sync + ?Sized,
        R: ReferenceResolver<S>,
    {
        let mut violations = ViolationList::new();

        violations.extend_from(rules::check_status(task));
        violations.extend_from(self.check_requester(scope, principal, task).await);
        violations.extend_from(self.check_recipient(scope, principal, task).await);
        violations.extend_from(rules::check_instantiates_uri(task));
        violations.extend_from(rules::check_message_name(task));
        violations.extend_from(rules::check_output_empty(task));

        violations
    }

    async fn check_requester<S>(
        &self,
        scope: &S,
        principal: &Principal,
        task: &Task,
    ) -> Option<TaskViolation>
    where
        S: Sync + ?Sized,
        R: ReferenceResolver<S>,
    {
        let Some(requester) = task.requester.as_ref() else {
            return Some(TaskViolation::RequesterMissing);
        };
        let member = is_member_of_referenced_organization(
            self.resolver.as_ref(),
            scope,
            principal,
            "task.requester",
            Some(requester),
        )
        .await;
        (!member).then_some(TaskViolation::RequesterNotCallerOrganization)
    }

    async fn check_recipient<S>(
        &self,
        scope: &S,
        principal: &Principal,
        task: &Task,
    ) -> Option<TaskViolation>
    where
        S: Sync + ?Sized,
        R: ReferenceResolver<S>,
    {
        if let Some(violation) = rules::check_recipient_count(task) {
            return Some(violation);
        }
        let lookup = resolve_organization(
            self.resolver.as_ref(),
            scope,
            principal,
            "task.restriction.recipient",
            task.single_recipient(),
        )
        .await;
        match lookup {
            OrganizationLookup::Found(organization) if self.directory.is_local(&organization) => {
                None
            }
            OrganizationLookup::Found(_) => Some(TaskViolation::RecipientNotLocal),
            OrganizationLookup::NotOrganization(_) => Some(TaskViolation::RecipientNotOrganization),
            OrganizationLookup::Unresolved => Some(TaskViolation::RecipientUnresolved),
        }
    }
}
