//! When steps for task authorization BDD scenarios.

use super::world::{TaskAuthorizationWorld, principal, run_async};
use rstest_bdd_macros::when;
use taskgate::task::{
    adapters::memory::MemoryScope,
    domain::{Coding, ParameterComponent, ParameterValue, TaskStatus},
    ports::StoredTask,
    services::TaskAccessResult,
};

fn record(world: &mut TaskAuthorizationWorld, result: TaskAccessResult<StoredTask>) {
    if let Ok(ref stored) = result {
        world.stored_task = Some(stored.clone());
    }
    world.last_result = Some(result);
}

fn stored_task(world: &TaskAuthorizationWorld) -> Result<StoredTask, eyre::Report> {
    world
        .stored_task
        .clone()
        .ok_or_else(|| eyre::eyre!("missing stored task in scenario world"))
}

fn move_task(
    world: &mut TaskAuthorizationWorld,
    role: &str,
    organization: &str,
    status: &str,
    with_output: bool,
) -> Result<(), eyre::Report> {
    let caller = principal(role, organization)?;
    let current = stored_task(world)?;
    let mut replacement = current
        .task
        .clone()
        .with_status(TaskStatus::try_from(status)?);
    if with_output {
        replacement = replacement.with_output(ParameterComponent::new(
            Coding::new("http://example.org/fhir/CodeSystem/registration", "patient-id"),
            ParameterValue::String("patient-42".to_owned()),
        ));
    }
    let result = run_async(world.service.update(
        &MemoryScope,
        &caller,
        current.id,
        current.version,
        &replacement,
    ));
    record(world, result);
    Ok(())
}

#[when(r#"a "{role}" user of "{organization}" creates the task"#)]
fn create_task(
    world: &mut TaskAuthorizationWorld,
    role: String,
    organization: String,
) -> Result<(), eyre::Report> {
    let caller = principal(&role, &organization)?;
    let task = world
        .pending_task
        .clone()
        .ok_or_else(|| eyre::eyre!("missing pending task in scenario world"))?;
    let result = run_async(world.service.create(&MemoryScope, &caller, &task));
    record(world, result);
    Ok(())
}

#[when(r#"a "{role}" user of "{organization}" moves the task to "{status}""#)]
fn move_task_to(
    world: &mut TaskAuthorizationWorld,
    role: String,
    organization: String,
    status: String,
) -> Result<(), eyre::Report> {
    move_task(world, &role, &organization, &status, false)
}

#[when(r#"a "{role}" user of "{organization}" moves the task to "{status}" with output"#)]
fn move_task_with_output(
    world: &mut TaskAuthorizationWorld,
    role: String,
    organization: String,
    status: String,
) -> Result<(), eyre::Report> {
    move_task(world, &role, &organization, &status, true)
}

#[when(r#"a "{role}" user of "{organization}" reads the task"#)]
fn read_task(
    world: &mut TaskAuthorizationWorld,
    role: String,
    organization: String,
) -> Result<(), eyre::Report> {
    let caller = principal(&role, &organization)?;
    let current = stored_task(world)?;
    let result = run_async(world.service.read(&MemoryScope, &caller, current.id));
    world.last_result = Some(result);
    Ok(())
}

#[when(r#"a "{role}" user of "{organization}" deletes the task"#)]
fn delete_task(
    world: &mut TaskAuthorizationWorld,
    role: String,
    organization: String,
) -> Result<(), eyre::Report> {
    let caller = principal(&role, &organization)?;
    let current = stored_task(world)?;
    let result = run_async(world.service.delete(
        &MemoryScope,
        &caller,
        current.id,
        current.version,
    ));
    world.last_result = Some(result);
    Ok(())
}
