//! Integration tests from client certificates to published task changes.

use rstest::rstest;
use taskgate::{
    identity::domain::{CertificateThumbprint, PrincipalRole},
    task::{
        adapters::memory::MemoryScope,
        domain::TaskStatus,
        ports::ChangeKind,
    },
};

use super::helpers::{LOCAL_CERTIFICATE, Node, PEER_CERTIFICATE, node, org_id, registration_task};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn certificates_map_to_local_and_remote_principals(
    node: eyre::Result<Node>,
) -> eyre::Result<()> {
    let node = node?;

    let peer = node
        .authenticator
        .authenticate("CN=peer-a", &CertificateThumbprint::of_der(PEER_CERTIFICATE))
        .ok_or_else(|| eyre::eyre!("peer certificate not recognized"))?;
    let local = node
        .authenticator
        .authenticate("CN=clerk", &CertificateThumbprint::of_der(LOCAL_CERTIFICATE))
        .ok_or_else(|| eyre::eyre!("local certificate not recognized"))?;
    let unknown = node
        .authenticator
        .authenticate("CN=stranger", &CertificateThumbprint::of_der(b"unknown"));

    eyre::ensure!(peer.role() == PrincipalRole::Remote, "peer role {}", peer.role());
    eyre::ensure!(peer.organization() == &org_id("org-a")?, "peer organization");
    eyre::ensure!(local.role() == PrincipalRole::Local, "local role {}", local.role());
    eyre::ensure!(local.organization() == &org_id("org-b")?, "local organization");
    eyre::ensure!(unknown.is_none(), "unknown certificate authenticated");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn authenticated_parties_drive_task_to_completion(
    node: eyre::Result<Node>,
) -> eyre::Result<()> {
    let node = node?;
    let mut changes = node.notifier.subscribe();
    let peer = node
        .authenticator
        .authenticate("CN=peer-a", &CertificateThumbprint::of_der(PEER_CERTIFICATE))
        .ok_or_else(|| eyre::eyre!("peer certificate not recognized"))?;
    let clerk = node
        .authenticator
        .authenticate("CN=clerk", &CertificateThumbprint::of_der(LOCAL_CERTIFICATE))
        .ok_or_else(|| eyre::eyre!("local certificate not recognized"))?;

    let created = node
        .service
        .create(&MemoryScope, &peer, &registration_task(TaskStatus::Requested))
        .await?;
    let accepted = node
        .service
        .update(
            &MemoryScope,
            &clerk,
            created.id,
            created.version,
            &registration_task(TaskStatus::InProgress),
        )
        .await?;
    let failed = node
        .service
        .update(
            &MemoryScope,
            &clerk,
            created.id,
            accepted.version,
            &registration_task(TaskStatus::Failed),
        )
        .await?;

    let mut published = Vec::new();
    for _ in 0..3 {
        let change = changes.recv().await?;
        published.push((change.kind, change.task.task.status));
    }
    eyre::ensure!(
        published
            == vec![
                (ChangeKind::Created, Some(TaskStatus::Requested)),
                (ChangeKind::Updated, Some(TaskStatus::InProgress)),
                (ChangeKind::Updated, Some(TaskStatus::Failed)),
            ],
        "unexpected changes {published:?}"
    );
    eyre::ensure!(failed.task.status == Some(TaskStatus::Failed), "final status");
    Ok(())
}
