//! Shared world state for task authorization BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskgate::{
    config::NodeConfig,
    identity::{
        adapters::memory::InMemoryOrganizationDirectory,
        domain::{Organization, OrganizationId, Principal, PrincipalRole},
    },
    process::adapters::memory::InMemoryProcessCatalog,
    task::{
        adapters::memory::{InMemoryReferenceResolver, InMemoryTaskStore, SubscriberRegistry},
        authorization::TaskAuthorizer,
        domain::Task,
        ports::StoredTask,
        services::{TaskAccessError, TaskAccessService},
    },
};

/// Authorizer type used by the BDD world.
pub type TestAuthorizer = TaskAuthorizer<
    InMemoryOrganizationDirectory,
    InMemoryReferenceResolver<InMemoryOrganizationDirectory>,
    InMemoryProcessCatalog,
>;

/// Store type used by the BDD world.
pub type TestStore = InMemoryTaskStore<DefaultClock>;

/// Service type used by the BDD world.
pub type TestService = TaskAccessService<TestAuthorizer, TestStore, SubscriberRegistry>;

/// Scenario world for task authorization behaviour tests.
pub struct TaskAuthorizationWorld {
    pub catalog: Arc<InMemoryProcessCatalog>,
    pub authorizer: Arc<TestAuthorizer>,
    pub store: Arc<TestStore>,
    pub service: TestService,
    pub pending_task: Option<Task>,
    pub stored_task: Option<StoredTask>,
    pub last_result: Option<Result<StoredTask, TaskAccessError>>,
}

impl TaskAuthorizationWorld {
    /// Creates a world for node `org-b` federated with peers `org-a` and
    /// `org-c`.
    ///
    /// # Panics
    ///
    /// Panics if the fixed organization ids or server base are invalid.
    #[must_use]
    pub fn new() -> Self {
        let organization = |id: &str| OrganizationId::new(id).expect("valid organization id");
        let directory = Arc::new(InMemoryOrganizationDirectory::with_organizations([
            Organization::local(organization("org-b"), "Node B"),
            Organization::remote(organization("org-a"), "Peer A"),
            Organization::remote(organization("org-c"), "Peer C"),
        ]));
        let config = NodeConfig::new("https://node-b.example.org/fhir", organization("org-b"))
            .expect("valid node config");
        let catalog = Arc::new(InMemoryProcessCatalog::new());
        let resolver = Arc::new(InMemoryReferenceResolver::new(
            Arc::clone(&directory),
            &config,
        ));
        let authorizer = Arc::new(
            TaskAuthorizer::new(directory, resolver, Arc::clone(&catalog))
                .with_server_base(config.server_base()),
        );
        let store = Arc::new(InMemoryTaskStore::new(Arc::new(DefaultClock)));
        let service = TaskAccessService::new(
            Arc::clone(&authorizer),
            Arc::clone(&store),
            Arc::new(SubscriberRegistry::new()),
        );

        Self {
            catalog,
            authorizer,
            store,
            service,
            pending_task: None,
            stored_task: None,
            last_result: None,
        }
    }
}

impl Default for TaskAuthorizationWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskAuthorizationWorld {
    TaskAuthorizationWorld::default()
}

/// Builds the principal a step acts as.
///
/// # Errors
///
/// Returns an error for unknown roles or malformed organization ids.
pub fn principal(role: &str, organization: &str) -> Result<Principal, eyre::Report> {
    let principal_role = match role {
        "local" => PrincipalRole::Local,
        "remote" => PrincipalRole::Remote,
        other => eyre::bail!("unknown principal role '{other}' in scenario"),
    };
    Ok(Principal::new(
        format!("{role}-user"),
        principal_role,
        OrganizationId::new(organization)?,
    )?)
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
