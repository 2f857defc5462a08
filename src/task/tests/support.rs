//! Shared fixtures for task tests.
//!
//! The federation used throughout: `org-b` and `org-d` are hosted by this
//! node, `org-a` and `org-c` are remote peers. The catalog lets `org-a` and any local user
//! send `startRegistration` to the `registerPatient` process.

use std::sync::Arc;

use crate::{
    config::NodeConfig,
    identity::{
        adapters::memory::InMemoryOrganizationDirectory,
        domain::{Organization, OrganizationId, OrganizationIdentifier, Principal, PrincipalRole},
    },
    process::{
        adapters::memory::InMemoryProcessCatalog,
        domain::{AllowedRequester, ProcessAllowEntry, ProcessKey, ProcessVersion},
    },
    task::{
        adapters::memory::InMemoryReferenceResolver,
        authorization::TaskAuthorizer,
        domain::{Coding, ParameterComponent, ParameterValue, Reference, Task, TaskStatus},
    },
};

pub const SERVER_BASE: &str = "https://node-b.example.org/fhir";
pub const PROCESS_URL: &str = "http://example.org/bpe/Process/registerPatient";
pub const INSTANTIATES_URI: &str = "http://example.org/bpe/Process/registerPatient/1.0.0";
pub const MESSAGE_NAME: &str = "startRegistration";
pub const IDENTIFIER_SYSTEM: &str = "http://highmed.org/fhir/NamingSystem/organization-identifier";

pub type Resolver = InMemoryReferenceResolver<InMemoryOrganizationDirectory>;
pub type Authorizer =
    TaskAuthorizer<InMemoryOrganizationDirectory, Resolver, InMemoryProcessCatalog>;

pub fn org_id(value: &str) -> OrganizationId {
    OrganizationId::new(value).expect("valid organization id")
}

pub fn organization_reference(id: &str) -> Reference {
    Reference::literal(format!("Organization/{id}"))
}

pub fn remote_user(organization: &str) -> Principal {
    Principal::new("peer-client", PrincipalRole::Remote, org_id(organization))
        .expect("valid principal")
}

pub fn local_user(organization: &str) -> Principal {
    Principal::new("node-user", PrincipalRole::Local, org_id(organization))
        .expect("valid principal")
}

pub fn node_config() -> NodeConfig {
    NodeConfig::new(SERVER_BASE, org_id("org-b")).expect("valid node config")
}

pub fn directory() -> Arc<InMemoryOrganizationDirectory> {
    let node_b_identifier =
        OrganizationIdentifier::new(IDENTIFIER_SYSTEM, "node-b.example.org").expect("identifier");
    Arc::new(InMemoryOrganizationDirectory::with_organizations([
        Organization::local(org_id("org-b"), "Node B").with_identifier(node_b_identifier),
        Organization::local(org_id("org-d"), "Node D"),
        Organization::remote(org_id("org-a"), "Peer A"),
        Organization::remote(org_id("org-c"), "Peer C"),
    ]))
}

pub fn registration_key() -> ProcessKey {
    ProcessKey::new(PROCESS_URL, ProcessVersion::new(1, 0, 0), MESSAGE_NAME)
}

pub fn catalog() -> Arc<InMemoryProcessCatalog> {
    let catalog = InMemoryProcessCatalog::new();
    catalog
        .register(
            ProcessAllowEntry::new(registration_key())
                .allowing(AllowedRequester::Organization(org_id("org-a")))
                .allowing(AllowedRequester::AnyLocal),
        )
        .expect("register allow entry");
    Arc::new(catalog)
}

pub fn resolver(directory: &Arc<InMemoryOrganizationDirectory>) -> Arc<Resolver> {
    Arc::new(InMemoryReferenceResolver::new(
        Arc::clone(directory),
        &node_config(),
    ))
}

pub fn authorizer() -> Authorizer {
    let directory = directory();
    let resolver = resolver(&directory);
    TaskAuthorizer::new(directory, resolver, catalog()).with_server_base(SERVER_BASE)
}

/// A task from `org-a` to the local `org-b` that passes every creation
/// check.
pub fn requested_task() -> Task {
    task_with_status(TaskStatus::Requested)
}

pub fn task_with_status(status: TaskStatus) -> Task {
    Task::default()
        .with_status(status)
        .with_instantiates_uri(INSTANTIATES_URI)
        .with_requester(organization_reference("org-a"))
        .with_recipient(organization_reference("org-b"))
        .with_input(ParameterComponent::message_name(MESSAGE_NAME))
}

pub fn output_entry() -> ParameterComponent {
    ParameterComponent::new(
        Coding::new("http://example.org/fhir/CodeSystem/registration", "patient-id"),
        ParameterValue::String("patient-42".to_owned()),
    )
}
