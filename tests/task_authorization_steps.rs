//! Behaviour tests for task authorization across organizations.

#[path = "task_authorization_steps/mod.rs"]
mod task_authorization_steps_defs;

use rstest_bdd_macros::scenario;
use task_authorization_steps_defs::world::{TaskAuthorizationWorld, world};

#[scenario(
    path = "tests/features/task_authorization.feature",
    name = "Peer organization starts a registration"
)]
#[tokio::test(flavor = "multi_thread")]
async fn peer_starts_registration(world: TaskAuthorizationWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_authorization.feature",
    name = "Blank message name is rejected"
)]
#[tokio::test(flavor = "multi_thread")]
async fn blank_message_name_rejected(world: TaskAuthorizationWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_authorization.feature",
    name = "Recipient accepts a requested task"
)]
#[tokio::test(flavor = "multi_thread")]
async fn recipient_accepts_task(world: TaskAuthorizationWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_authorization.feature",
    name = "Recipient may not attach output when accepting"
)]
#[tokio::test(flavor = "multi_thread")]
async fn recipient_output_on_accept_rejected(world: TaskAuthorizationWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_authorization.feature",
    name = "Recipient completes a task with output"
)]
#[tokio::test(flavor = "multi_thread")]
async fn recipient_completes_task(world: TaskAuthorizationWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_authorization.feature",
    name = "Unrelated organization cannot read the task"
)]
#[tokio::test(flavor = "multi_thread")]
async fn unrelated_organization_read_rejected(world: TaskAuthorizationWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_authorization.feature",
    name = "Issued task cannot be deleted"
)]
#[tokio::test(flavor = "multi_thread")]
async fn issued_task_delete_rejected(world: TaskAuthorizationWorld) {
    let _ = world;
}
