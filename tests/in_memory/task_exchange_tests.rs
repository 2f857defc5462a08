//! Integration tests for multi-party task exchanges.

use rstest::rstest;
use taskgate::{
    identity::domain::{Principal, PrincipalRole},
    task::{
        adapters::memory::MemoryScope,
        domain::{Reference, TaskStatus},
        services::TaskAccessError,
    },
};

use super::helpers::{Node, node, org_id, registration_task};

fn principal(role: PrincipalRole, organization: &str) -> eyre::Result<Principal> {
    Ok(Principal::new("integration-user", role, org_id(organization)?)?)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn peer_without_allow_entry_cannot_trigger_process(
    node: eyre::Result<Node>,
) -> eyre::Result<()> {
    let node = node?;
    let outsider = principal(PrincipalRole::Remote, "org-c")?;
    let task = registration_task(TaskStatus::Requested)
        .with_requester(Reference::literal("Organization/org-c"));

    let result = node.service.create(&MemoryScope, &outsider, &task).await;

    eyre::ensure!(
        matches!(result, Err(TaskAccessError::Forbidden)),
        "got {result:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn requester_revises_draft_then_recipient_accepts(
    node: eyre::Result<Node>,
) -> eyre::Result<()> {
    let node = node?;
    let requester = principal(PrincipalRole::Remote, "org-a")?;
    let recipient = principal(PrincipalRole::Local, "org-b")?;

    let draft = node
        .service
        .create(&MemoryScope, &requester, &registration_task(TaskStatus::Draft))
        .await?;
    let premature = node
        .service
        .update(
            &MemoryScope,
            &recipient,
            draft.id,
            draft.version,
            &registration_task(TaskStatus::InProgress),
        )
        .await;
    eyre::ensure!(
        matches!(premature, Err(TaskAccessError::Forbidden)),
        "recipient acted on a draft: {premature:?}"
    );

    let issued = node
        .service
        .update(
            &MemoryScope,
            &requester,
            draft.id,
            draft.version,
            &registration_task(TaskStatus::Requested),
        )
        .await?;
    let accepted = node
        .service
        .update(
            &MemoryScope,
            &recipient,
            issued.id,
            issued.version,
            &registration_task(TaskStatus::InProgress),
        )
        .await?;

    eyre::ensure!(
        accepted.task.status == Some(TaskStatus::InProgress),
        "unexpected status {:?}",
        accepted.task.status
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn requester_cannot_complete_its_own_task(node: eyre::Result<Node>) -> eyre::Result<()> {
    let node = node?;
    let requester = principal(PrincipalRole::Remote, "org-a")?;
    let created = node
        .service
        .create(&MemoryScope, &requester, &registration_task(TaskStatus::Requested))
        .await?;

    let result = node
        .service
        .update(
            &MemoryScope,
            &requester,
            created.id,
            created.version,
            &registration_task(TaskStatus::InProgress),
        )
        .await;

    eyre::ensure!(
        matches!(result, Err(TaskAccessError::Forbidden)),
        "got {result:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn both_parties_see_the_task_in_search(node: eyre::Result<Node>) -> eyre::Result<()> {
    let node = node?;
    let requester = principal(PrincipalRole::Remote, "org-a")?;
    let created = node
        .service
        .create(&MemoryScope, &requester, &registration_task(TaskStatus::Requested))
        .await?;

    for caller in [requester, principal(PrincipalRole::Local, "org-b")?] {
        let found = node.service.search(&MemoryScope, &caller).await?;
        eyre::ensure!(
            found.iter().map(|stored| stored.id).collect::<Vec<_>>() == vec![created.id],
            "{} search returned {found:?}",
            caller.organization()
        );
    }
    let outsider = node
        .service
        .search(&MemoryScope, &principal(PrincipalRole::Remote, "org-c")?)
        .await?;
    eyre::ensure!(outsider.is_empty(), "outsider sees {outsider:?}");
    Ok(())
}
