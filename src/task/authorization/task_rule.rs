//! Authorization rules for the task resource.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use super::{
    AuthorizationDecision, JsonTaskFormatter, LifecycleAuthorizer, SearchAuthorization,
    TaskFormatter, TaskOperation, TransitionRule, UpdateBranch,
    membership::is_member_of_referenced_organization, process_access::is_process_allowed,
};
use crate::{
    identity::{domain::Principal, ports::OrganizationDirectory},
    process::ports::ProcessCatalog,
    task::{
        domain::{SearchFilter, Task, TaskStatus},
        ports::ReferenceResolver,
        validation::{ChangedField, StructuralValidator, diff_immutable_fields},
    },
};

const CREATE_ALLOWED: &str = "local or remote user, task.status draft or requested, \
     task.requester current users organization, task.restriction.recipient local organization, \
     process with instantiatesUri and message-name allowed for current user";
const PROCESS_NOT_ALLOWED: &str =
    "process with instantiatesUri and message-name not allowed for current user";
const NOT_RECOGNIZED: &str = "not a local or remote user";
const UNCHANGED_PROPERTIES: &str =
    "properties task.instantiatesUri, task.requester, task.restriction, task.input not changed";

/// Authorizes lifecycle operations on tasks.
///
/// Combines structural validation, organization-membership checks and
/// process allow-list lookups. Holds no mutable state; one instance may
/// serve concurrent decisions.
pub struct TaskAuthorizer<D, R, P, F = JsonTaskFormatter> {
    directory: Arc<D>,
    resolver: Arc<R>,
    catalog: Arc<P>,
    formatter: Arc<F>,
    validator: StructuralValidator<D, R>,
    server_base: Option<String>,
}

impl<D, R, P> TaskAuthorizer<D, R, P>
where
    D: OrganizationDirectory,
{
    /// Creates an authorizer that renders tasks as JSON in debug logs.
    #[must_use]
    pub fn new(directory: Arc<D>, resolver: Arc<R>, catalog: Arc<P>) -> Self {
        Self::with_formatter(directory, resolver, catalog, Arc::new(JsonTaskFormatter))
    }
}

impl<D, R, P, F> TaskAuthorizer<D, R, P, F>
where
    D: OrganizationDirectory,
    F: TaskFormatter,
{
    /// Creates an authorizer with a custom task formatter.
    #[must_use]
    pub fn with_formatter(
        directory: Arc<D>,
        resolver: Arc<R>,
        catalog: Arc<P>,
        formatter: Arc<F>,
    ) -> Self {
        let validator = StructuralValidator::new(Arc::clone(&directory), Arc::clone(&resolver));
        Self {
            directory,
            resolver,
            catalog,
            formatter,
            validator,
            server_base: None,
        }
    }

    /// Lets search results include tasks that reference this node's
    /// organizations through absolute URLs under `server_base`.
    #[must_use]
    pub fn with_server_base(mut self, server_base: &str) -> Self {
        self.server_base = Some(server_base.to_owned());
        self
    }

    fn is_recognized(&self, principal: &Principal) -> bool {
        self.directory.is_local_user(principal) || self.directory.is_remote_user(principal)
    }

    /// Runs the creation checks against `task`, returning the reason for
    /// refusal on failure.
    async fn revalidate<S>(&self, scope: &S, principal: &Principal, task: &Task) -> Result<(), String>
    where
        S: Sync + ?Sized,
        R: ReferenceResolver<S>,
        P: ProcessCatalog<S>,
    {
        let violations = self.validator.validate(scope, principal, task).await;
        if !violations.is_empty() {
            return Err(violations.to_string());
        }
        let (Some(uri), Some(message_name)) =
            (task.instantiates_uri.as_deref(), task.single_message_name())
        else {
            return Err(PROCESS_NOT_ALLOWED.to_owned());
        };
        if is_process_allowed(self.catalog.as_ref(), scope, principal, uri, message_name).await {
            Ok(())
        } else {
            Err(PROCESS_NOT_ALLOWED.to_owned())
        }
    }

    async fn is_requester_member<S>(&self, scope: &S, principal: &Principal, task: &Task) -> bool
    where
        S: Sync + ?Sized,
        R: ReferenceResolver<S>,
    {
        is_member_of_referenced_organization(
            self.resolver.as_ref(),
            scope,
            principal,
            "task.requester",
            task.requester.as_ref(),
        )
        .await
    }

    async fn is_local_recipient_member<S>(
        &self,
        scope: &S,
        principal: &Principal,
        task: &Task,
    ) -> bool
    where
        S: Sync + ?Sized,
        R: ReferenceResolver<S>,
    {
        self.directory.is_local_user(principal)
            && is_member_of_referenced_organization(
                self.resolver.as_ref(),
                scope,
                principal,
                "task.restriction.recipient",
                task.recipients().first(),
            )
            .await
    }

    fn authorize_transition(
        &self,
        principal: &Principal,
        old: &Task,
        new: &Task,
    ) -> AuthorizationDecision {
        let changed = diff_immutable_fields(old, new);
        if !changed.is_empty() {
            debug!(
                old = %self.formatter.format(old),
                new = %self.formatter.format(new),
                "immutable task properties changed"
            );
            return deny(
                TaskOperation::Update,
                principal,
                format!("task properties {} changed", join_fields(&changed)),
            );
        }
        match TransitionRule::evaluate(old.status, new.status, new.output.is_empty()) {
            TransitionRule::Allowed => allow(
                TaskOperation::Update,
                principal,
                format!(
                    "local user part of task.restriction.recipient, task.status {} -> {}, {UNCHANGED_PROPERTIES}",
                    status_label(old.status),
                    status_label(new.status)
                ),
            ),
            TransitionRule::OutputNotExpected => deny(
                TaskOperation::Update,
                principal,
                "task.output not expected",
            ),
            TransitionRule::NotAllowed => deny(
                TaskOperation::Update,
                principal,
                format!(
                    "task.status change {} -> {} not allowed",
                    status_label(old.status),
                    status_label(new.status)
                ),
            ),
        }
    }
}

#[async_trait]
impl<S, D, R, P, F> LifecycleAuthorizer<S> for TaskAuthorizer<D, R, P, F>
where
    S: Sync + ?Sized,
    D: OrganizationDirectory,
    R: ReferenceResolver<S>,
    P: ProcessCatalog<S>,
    F: TaskFormatter,
{
    type Resource = Task;

    async fn authorize_create(
        &self,
        scope: &S,
        principal: &Principal,
        resource: &Task,
    ) -> AuthorizationDecision {
        if !self.is_recognized(principal) {
            return deny(TaskOperation::Create, principal, NOT_RECOGNIZED);
        }
        match self.revalidate(scope, principal, resource).await {
            Ok(()) => allow(TaskOperation::Create, principal, CREATE_ALLOWED),
            Err(reason) => deny(TaskOperation::Create, principal, reason),
        }
    }

    async fn authorize_read(
        &self,
        scope: &S,
        principal: &Principal,
        resource: &Task,
    ) -> AuthorizationDecision {
        if self.is_requester_member(scope, principal, resource).await {
            return allow(
                TaskOperation::Read,
                principal,
                "task.requester resolved and user part of referenced organization",
            );
        }
        if self.is_local_recipient_member(scope, principal, resource).await {
            return allow(
                TaskOperation::Read,
                principal,
                "task.restriction.recipient resolved and local user part of referenced organization",
            );
        }
        deny(
            TaskOperation::Read,
            principal,
            "task.requester or task.restriction.recipient could not be resolved or user not part of referenced organizations",
        )
    }

    async fn authorize_update(
        &self,
        scope: &S,
        principal: &Principal,
        old: &Task,
        new: &Task,
    ) -> AuthorizationDecision {
        if !self.is_recognized(principal) {
            return deny(TaskOperation::Update, principal, NOT_RECOGNIZED);
        }
        let requester_member = old.status == Some(TaskStatus::Draft)
            && self.is_requester_member(scope, principal, old).await;
        let recipient_member = matches!(
            old.status,
            Some(TaskStatus::Requested | TaskStatus::InProgress)
        ) && self.is_local_recipient_member(scope, principal, old).await;

        match UpdateBranch::select(old.status, requester_member, recipient_member) {
            UpdateBranch::DraftRevision => match self.revalidate(scope, principal, new).await {
                Ok(()) => allow(
                    TaskOperation::Update,
                    principal,
                    format!("task.status draft revised by task.requester member, {CREATE_ALLOWED}"),
                ),
                Err(reason) => deny(TaskOperation::Update, principal, reason),
            },
            UpdateBranch::RecipientTransition => self.authorize_transition(principal, old, new),
            UpdateBranch::Ineligible => deny(
                TaskOperation::Update,
                principal,
                "expected task.status draft and current user part of task.requester or \
                 task.status requested or in-progress and current local user part of task.restriction.recipient",
            ),
        }
    }

    async fn authorize_delete(
        &self,
        scope: &S,
        principal: &Principal,
        old: &Task,
    ) -> AuthorizationDecision {
        if old.status != Some(TaskStatus::Draft) {
            return deny(
                TaskOperation::Delete,
                principal,
                format!("task.status {} not draft", status_label(old.status)),
            );
        }
        if self.is_requester_member(scope, principal, old).await {
            return allow(
                TaskOperation::Delete,
                principal,
                "task.status draft, task.requester resolved and user part of referenced organization",
            );
        }
        if self.is_local_recipient_member(scope, principal, old).await {
            return allow(
                TaskOperation::Delete,
                principal,
                "local user, task.status draft, task.restriction.recipient resolved and user part of referenced organization",
            );
        }
        deny(
            TaskOperation::Delete,
            principal,
            "task.requester not current users organization and task.restriction.recipient not local users organization",
        )
    }

    async fn authorize_search(&self, _scope: &S, principal: &Principal) -> SearchAuthorization {
        let identifier = self
            .directory
            .find_by_id(principal.organization())
            .and_then(|organization| organization.identifier().cloned());
        let mut filter = SearchFilter::for_organization(principal.organization().clone());
        if let Some(found) = identifier {
            filter = filter.with_identifier(found);
        }
        if let Some(base) = self.server_base.as_deref() {
            filter = filter.with_server_base(base);
        }
        info!(
            operation = %TaskOperation::Search,
            user = principal.name(),
            role = %principal.role(),
            organization = %principal.organization(),
            "task search authorized, filtered by users organization"
        );
        SearchAuthorization::new("allowed for all, filtered by users organization", filter)
    }
}

fn allow(
    operation: TaskOperation,
    principal: &Principal,
    reason: impl Into<String>,
) -> AuthorizationDecision {
    let decision = AuthorizationDecision::allowed(reason);
    info!(
        %operation,
        user = principal.name(),
        role = %principal.role(),
        organization = %principal.organization(),
        reason = decision.reason(),
        "task operation authorized"
    );
    decision
}

fn deny(
    operation: TaskOperation,
    principal: &Principal,
    reason: impl Into<String>,
) -> AuthorizationDecision {
    let decision = AuthorizationDecision::denied(reason);
    warn!(
        %operation,
        user = principal.name(),
        role = %principal.role(),
        organization = %principal.organization(),
        reason = decision.reason(),
        "task operation unauthorized"
    );
    decision
}

fn join_fields(fields: &[ChangedField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

const fn status_label(status: Option<TaskStatus>) -> &'static str {
    match status {
        Some(known) => known.as_str(),
        None => "missing",
    }
}
