//! Shared helpers for in-memory integration tests.

use std::sync::{Arc, Once};

use mockable::DefaultClock;
use rstest::fixture;
use taskgate::{
    config::NodeConfig,
    identity::{
        adapters::memory::InMemoryOrganizationDirectory,
        domain::{CertificateThumbprint, Organization, OrganizationId},
        services::CertificateAuthenticator,
    },
    process::{
        adapters::memory::InMemoryProcessCatalog,
        domain::{AllowedRequester, ProcessAllowEntry, ProcessKey, ProcessUri},
    },
    task::{
        adapters::memory::{BroadcastChangeNotifier, InMemoryReferenceResolver, InMemoryTaskStore},
        authorization::TaskAuthorizer,
        domain::{ParameterComponent, Reference, Task, TaskStatus},
        services::TaskAccessService,
    },
};
use tracing_subscriber::EnvFilter;

/// Process URI the federation exchanges tasks for.
pub const INSTANTIATES_URI: &str = "http://example.org/bpe/Process/registerPatient/1.0.0";

/// Message starting the registration process.
pub const MESSAGE_NAME: &str = "startRegistration";

/// DER bytes standing in for the peer organization's client certificate.
pub const PEER_CERTIFICATE: &[u8] = b"peer organization org-a client certificate";

/// DER bytes standing in for a local user's client certificate.
pub const LOCAL_CERTIFICATE: &[u8] = b"node org-b local user certificate";

/// Resolver used by the in-memory node.
pub type Resolver = InMemoryReferenceResolver<InMemoryOrganizationDirectory>;

/// Authorizer used by the in-memory node.
pub type Authorizer = TaskAuthorizer<InMemoryOrganizationDirectory, Resolver, InMemoryProcessCatalog>;

/// Access service used by the in-memory node.
pub type Service =
    TaskAccessService<Authorizer, InMemoryTaskStore<DefaultClock>, BroadcastChangeNotifier>;

static TRACING: Once = Once::new();

/// Installs a test log subscriber honouring `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .init();
    });
}

/// A fully wired node hosting `org-b`, federated with peers `org-a` and
/// `org-c`.
pub struct Node {
    pub authenticator: CertificateAuthenticator<InMemoryOrganizationDirectory>,
    pub service: Service,
    pub notifier: Arc<BroadcastChangeNotifier>,
}

/// Parses an organization id known to be valid.
///
/// # Errors
///
/// Returns an error when the id is malformed.
pub fn org_id(value: &str) -> eyre::Result<OrganizationId> {
    Ok(OrganizationId::new(value)?)
}

/// Builds the node from its JSON configuration.
///
/// # Errors
///
/// Returns an error when the configuration or catalog cannot be set up.
pub fn build_node() -> eyre::Result<Node> {
    init_tracing();
    let local_thumbprint = CertificateThumbprint::of_der(LOCAL_CERTIFICATE);
    let config = NodeConfig::from_json_str(&format!(
        r#"{{
            "server_base_url": "https://node-b.example.org/fhir/",
            "local_organization": "org-b",
            "local_user_thumbprints": ["{local_thumbprint}"]
        }}"#
    ))?;

    let directory = Arc::new(InMemoryOrganizationDirectory::with_organizations([
        Organization::local(org_id("org-b")?, "Node B"),
        Organization::remote(org_id("org-a")?, "Peer A")
            .with_thumbprint(CertificateThumbprint::of_der(PEER_CERTIFICATE)),
        Organization::remote(org_id("org-c")?, "Peer C"),
    ]));

    let catalog = Arc::new(InMemoryProcessCatalog::new());
    let uri = ProcessUri::parse(INSTANTIATES_URI)?;
    catalog.register(
        ProcessAllowEntry::new(ProcessKey::for_message(&uri, MESSAGE_NAME))
            .allowing(AllowedRequester::Organization(org_id("org-a")?)),
    )?;

    let resolver = Arc::new(InMemoryReferenceResolver::new(Arc::clone(&directory), &config));
    let authorizer = Arc::new(
        TaskAuthorizer::new(Arc::clone(&directory), resolver, catalog)
            .with_server_base(config.server_base()),
    );
    let notifier = Arc::new(BroadcastChangeNotifier::new(16));
    let store = Arc::new(InMemoryTaskStore::new(Arc::new(DefaultClock)));

    Ok(Node {
        authenticator: CertificateAuthenticator::new(directory, &config),
        service: TaskAccessService::new(authorizer, store, Arc::clone(&notifier)),
        notifier,
    })
}

/// Provides a freshly built node for each test.
///
/// # Errors
///
/// Returns an error when the node cannot be built.
#[fixture]
pub fn node() -> eyre::Result<Node> {
    build_node()
}

/// Returns a task from `org-a` to `org-b` in the given status.
#[must_use]
pub fn registration_task(status: TaskStatus) -> Task {
    Task::default()
        .with_status(status)
        .with_instantiates_uri(INSTANTIATES_URI)
        .with_requester(Reference::literal("Organization/org-a"))
        .with_recipient(Reference::literal(
            "https://node-b.example.org/fhir/Organization/org-b",
        ))
        .with_input(ParameterComponent::message_name(MESSAGE_NAME))
}
