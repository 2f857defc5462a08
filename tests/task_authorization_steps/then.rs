//! Then steps for task authorization BDD scenarios.

use super::world::{TaskAuthorizationWorld, principal, run_async};
use rstest_bdd_macros::then;
use taskgate::task::{
    adapters::memory::MemoryScope,
    authorization::LifecycleAuthorizer,
    domain::TaskStatus,
    ports::TaskStore,
    services::TaskAccessError,
};

#[then("the operation is allowed")]
fn operation_allowed(world: &TaskAuthorizationWorld) -> Result<(), eyre::Report> {
    match world.last_result.as_ref() {
        Some(Ok(_)) => Ok(()),
        Some(Err(err)) => Err(eyre::eyre!("expected the operation to succeed, got {err}")),
        None => Err(eyre::eyre!("missing operation result")),
    }
}

#[then("the operation is forbidden")]
fn operation_forbidden(world: &TaskAuthorizationWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing operation result"))?;
    if !matches!(result, Err(TaskAccessError::Forbidden)) {
        return Err(eyre::eyre!("expected Forbidden, got {result:?}"));
    }
    Ok(())
}

#[then(r#"the stored task has status "{status}""#)]
fn stored_task_status(world: &TaskAuthorizationWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())?;
    let id = world
        .stored_task
        .as_ref()
        .map(|current| current.id)
        .ok_or_else(|| eyre::eyre!("missing stored task in scenario world"))?;
    let stored = run_async(world.store.read(&MemoryScope, id))?
        .ok_or_else(|| eyre::eyre!("task {id} no longer stored"))?;
    if stored.task.status != Some(expected) {
        return Err(eyre::eyre!(
            "expected status {expected}, found {:?}",
            stored.task.status
        ));
    }
    Ok(())
}

#[then(
    r#"the audit reason for a "{role}" user of "{organization}" creating the task mentions "{fragment}""#
)]
fn create_reason_mentions(
    world: &TaskAuthorizationWorld,
    role: String,
    organization: String,
    fragment: String,
) -> Result<(), eyre::Report> {
    let caller = principal(&role, &organization)?;
    let task = world
        .pending_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing pending task in scenario world"))?;
    let decision = run_async(world.authorizer.authorize_create(&MemoryScope, &caller, task));
    if !decision.reason().contains(&fragment) {
        return Err(eyre::eyre!(
            "expected reason to mention '{fragment}', got '{}'",
            decision.reason()
        ));
    }
    Ok(())
}
