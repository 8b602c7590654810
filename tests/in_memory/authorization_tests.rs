//! Role gating tests across every facade operation.

use super::helpers::{IMPORT_CSV, World, finalize_payload, pdf_files, submit_payload};
use freightdesk::api::{DispatchError, ErrorKind};
use freightdesk::auth::{Principal, Role};
use freightdesk::task::domain::TaskStatus;
use rstest::{fixture, rstest};

#[fixture]
fn world() -> World {
    World::new()
}

#[rstest]
#[case(Role::SaleAgent)]
#[case(Role::Dispatcher)]
#[case(Role::Admin)]
#[case(Role::Owner)]
#[tokio::test(flavor = "multi_thread")]
async fn only_the_project_divider_may_bulk_create(world: World, #[case] role: Role) {
    let agent = world.actor("Dana Field", Role::SaleAgent);
    let caller = world.actor("Someone Else", role);

    let result = world
        .api
        .bulk_create(&caller, agent.id(), IMPORT_CSV.as_bytes())
        .await;

    let err = result.expect_err("must be denied");
    assert_eq!(err.kind(), ErrorKind::AccessDenied);

    // Denied before any mutation: nothing was inserted.
    let listing = world
        .api
        .tasks_for_caller(&agent)
        .await
        .expect("agent listing succeeds");
    assert!(listing.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dispatchers_may_not_list_agent_assignments(world: World) {
    let dispatcher = world.actor("Lee Dispatch", Role::Dispatcher);

    let result = world.api.tasks_for_caller(&dispatcher).await;

    assert!(matches!(result, Err(DispatchError::AccessDenied(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn agents_may_not_review_the_dispatch_queue(world: World) {
    let agent = world.actor("Dana Field", Role::SaleAgent);

    let result = world
        .api
        .tasks_by_status(&agent, TaskStatus::Submitted)
        .await;

    assert!(matches!(result, Err(DispatchError::AccessDenied(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn agents_may_not_finalize(world: World) {
    let divider = world.actor("Pat Divider", Role::ProjectDivider);
    let agent = world.actor("Dana Field", Role::SaleAgent);
    let dispatcher = world.actor("Lee Dispatch", Role::Dispatcher);

    world
        .api
        .bulk_create(&divider, agent.id(), IMPORT_CSV.as_bytes())
        .await
        .expect("bulk create succeeds");
    let assignments = world
        .api
        .tasks_for_caller(&agent)
        .await
        .expect("agent listing succeeds");
    let task_id = assignments.first().expect("one task").id().to_string();
    world
        .api
        .submit(&agent, &task_id, submit_payload(&dispatcher), &pdf_files(1))
        .await
        .expect("submit succeeds");

    let result = world.api.finalize(&agent, &task_id, finalize_payload()).await;

    assert!(matches!(result, Err(DispatchError::AccessDenied(_))));
    let stored = world
        .api
        .task(&agent, &task_id)
        .await
        .expect("fetch succeeds");
    assert_eq!(stored.status(), TaskStatus::Submitted);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dispatchers_may_not_submit(world: World) {
    let dispatcher = world.actor("Lee Dispatch", Role::Dispatcher);

    let result = world
        .api
        .submit(
            &dispatcher,
            "irrelevant",
            submit_payload(&dispatcher),
            &pdf_files(1),
        )
        .await;

    // The gate runs before id parsing, so the malformed id never surfaces.
    assert!(matches!(result, Err(DispatchError::AccessDenied(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn both_agents_and_dispatchers_may_fetch_a_task(world: World) {
    let divider = world.actor("Pat Divider", Role::ProjectDivider);
    let agent = world.actor("Dana Field", Role::SaleAgent);
    let dispatcher = world.actor("Lee Dispatch", Role::Dispatcher);
    let admin = world.actor("Ash Admin", Role::Admin);

    world
        .api
        .bulk_create(&divider, agent.id(), IMPORT_CSV.as_bytes())
        .await
        .expect("bulk create succeeds");
    let assignments = world
        .api
        .tasks_for_caller(&agent)
        .await
        .expect("agent listing succeeds");
    let task_id = assignments.first().expect("one task").id().to_string();

    assert!(world.api.task(&agent, &task_id).await.is_ok());
    assert!(world.api.task(&dispatcher, &task_id).await.is_ok());
    assert!(matches!(
        world.api.task(&admin, &task_id).await,
        Err(DispatchError::AccessDenied(_))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_malformed_principal_reference_fails_after_the_gate(world: World) {
    let impostor = Principal::new("not-a-reference", Role::SaleAgent);

    let result = world.api.tasks_for_caller(&impostor).await;

    // The role check passes; the identity-context id then fails to parse.
    let err = result.expect_err("must be rejected");
    assert_eq!(err.kind(), ErrorKind::InvalidReference);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn denial_carries_the_rejected_role_and_required_set(world: World) {
    let agent = world.actor("Dana Field", Role::SaleAgent);

    let result = world
        .api
        .tasks_by_status(&agent, TaskStatus::Submitted)
        .await;

    let Err(DispatchError::AccessDenied(denied)) = result else {
        panic!("expected an access denial");
    };
    assert_eq!(denied.role, Role::SaleAgent);
    assert_eq!(denied.required, vec![Role::Dispatcher]);
}
