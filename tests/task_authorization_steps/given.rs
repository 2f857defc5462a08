//! Given steps for task authorization BDD scenarios.

use super::world::{TaskAuthorizationWorld, principal, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskgate::{
    identity::domain::OrganizationId,
    process::domain::{AllowedRequester, ProcessAllowEntry, ProcessKey, ProcessUri},
    task::{
        adapters::memory::MemoryScope,
        domain::{ParameterComponent, Reference, Task, TaskStatus},
    },
};

#[given(r#"the process "{process_uri}" accepts message "{message_name}" from "{organization}""#)]
fn process_accepts_message(
    world: &mut TaskAuthorizationWorld,
    process_uri: String,
    message_name: String,
    organization: String,
) -> Result<(), eyre::Report> {
    let uri = ProcessUri::parse(&process_uri)?;
    world.catalog.register(
        ProcessAllowEntry::new(ProcessKey::for_message(&uri, message_name))
            .allowing(AllowedRequester::Organization(OrganizationId::new(organization)?)),
    )?;
    Ok(())
}

#[given(
    r#"a "{status}" task from "{requester}" to "{recipient}" triggering "{message_name}" on "{process_uri}""#
)]
fn pending_task(
    world: &mut TaskAuthorizationWorld,
    status: String,
    requester: String,
    recipient: String,
    message_name: String,
    process_uri: String,
) -> Result<(), eyre::Report> {
    let task_status = TaskStatus::try_from(status.as_str())?;
    world.pending_task = Some(
        Task::default()
            .with_status(task_status)
            .with_instantiates_uri(process_uri)
            .with_requester(Reference::literal(format!("Organization/{requester}")))
            .with_recipient(Reference::literal(format!("Organization/{recipient}")))
            .with_input(ParameterComponent::message_name(message_name)),
    );
    Ok(())
}

#[given("the task's message name is blank")]
fn blank_message_name(world: &mut TaskAuthorizationWorld) -> Result<(), eyre::Report> {
    let task = world
        .pending_task
        .as_mut()
        .ok_or_else(|| eyre::eyre!("missing pending task in scenario world"))?;
    task.input = vec![ParameterComponent::message_name("   ")];
    Ok(())
}

#[given(r#"the task was created by a "{role}" user of "{organization}""#)]
fn task_created_by(
    world: &mut TaskAuthorizationWorld,
    role: String,
    organization: String,
) -> Result<(), eyre::Report> {
    let creator = principal(&role, &organization)?;
    let task = world
        .pending_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing pending task in scenario world"))?;
    let stored = run_async(world.service.create(&MemoryScope, &creator, task))
        .wrap_err("create task for scenario")?;
    world.stored_task = Some(stored);
    Ok(())
}
