//! Bulk CSV import through the facade: atomicity, column tolerance, and
//! reference handling.

use super::helpers::{IMPORT_CSV, World};
use freightdesk::api::{DispatchError, ErrorKind};
use freightdesk::auth::Role;
use freightdesk::task::domain::{CarrierDetails, Task, TaskStatus};
use freightdesk::task::ports::{TaskRepository, TaskRepositoryError};
use freightdesk::user::UserId;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn world() -> World {
    World::new()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_full_import_assigns_every_row_to_the_agent(world: World) {
    let divider = world.actor("Pat Divider", Role::ProjectDivider);
    let agent = world.actor("Dana Field", Role::SaleAgent);

    let report = world
        .api
        .bulk_create(&divider, agent.id(), IMPORT_CSV.as_bytes())
        .await
        .expect("import succeeds");

    assert_eq!(report.inserted, 5);
    let assignments = world
        .api
        .tasks_for_caller(&agent)
        .await
        .expect("agent listing succeeds");
    assert_eq!(assignments.len(), 5);
    assert!(
        assignments
            .iter()
            .all(|task| task.status() == TaskStatus::Assigned)
    );
    let mc_numbers: Vec<&str> = assignments
        .iter()
        .map(|task| task.carrier().mc_number.as_str())
        .collect();
    assert!(mc_numbers.contains(&"MC-100"));
    assert!(mc_numbers.contains(&"MC-500"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_colon_prefixed_agent_reference_is_accepted(world: World) {
    let divider = world.actor("Pat Divider", Role::ProjectDivider);
    let agent = world.actor("Dana Field", Role::SaleAgent);
    let prefixed = format!(":{}", agent.id());

    let report = world
        .api
        .bulk_create(&divider, &prefixed, IMPORT_CSV.as_bytes())
        .await
        .expect("import succeeds");

    assert_eq!(report.inserted, 5);
}

#[rstest]
#[case("not-a-reference")]
#[case(":still-not-a-reference")]
#[case("")]
#[tokio::test(flavor = "multi_thread")]
async fn a_malformed_agent_reference_is_rejected(world: World, #[case] agent_id: &str) {
    let divider = world.actor("Pat Divider", Role::ProjectDivider);

    let result = world
        .api
        .bulk_create(&divider, agent_id, IMPORT_CSV.as_bytes())
        .await;

    let err = result.expect_err("must be rejected");
    assert_eq!(err.kind(), ErrorKind::InvalidReference);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn an_unknown_agent_reference_is_rejected(world: World) {
    let divider = world.actor("Pat Divider", Role::ProjectDivider);
    let unseeded = UserId::new();

    let result = world
        .api
        .bulk_create(&divider, &unseeded.to_string(), IMPORT_CSV.as_bytes())
        .await;

    let err = result.expect_err("must be rejected");
    assert_eq!(err.kind(), ErrorKind::InvalidReference);
    assert!(err.to_string().contains(&unseeded.to_string()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn an_empty_upload_is_rejected_as_invalid_input(world: World) {
    let divider = world.actor("Pat Divider", Role::ProjectDivider);
    let agent = world.actor("Dana Field", Role::SaleAgent);

    let result = world.api.bulk_create(&divider, agent.id(), &[]).await;

    let err = result.expect_err("must be rejected");
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_header_only_upload_is_rejected_as_an_empty_dataset(world: World) {
    let divider = world.actor("Pat Divider", Role::ProjectDivider);
    let agent = world.actor("Dana Field", Role::SaleAgent);
    let header_only = "MC Number,Company Name,Address,Email,Phone\n";

    let result = world
        .api
        .bulk_create(&divider, agent.id(), header_only.as_bytes())
        .await;

    assert!(matches!(result, Err(DispatchError::EmptyDataset)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn an_unparseable_upload_inserts_nothing(world: World) {
    let divider = world.actor("Pat Divider", Role::ProjectDivider);
    let agent = world.actor("Dana Field", Role::SaleAgent);
    // The second data row carries too many fields for the header.
    let ragged = "\
MC Number,Company Name,Address,Email,Phone
MC-100,Alpha Freight,1 Pier Ave,alpha@example.com,555-0101
MC-200,Bravo Haulage,2 Pier Ave,bravo@example.com,555-0102,surplus
";

    let result = world
        .api
        .bulk_create(&divider, agent.id(), ragged.as_bytes())
        .await;

    assert!(matches!(result, Err(DispatchError::MalformedInput)));
    let assignments = world
        .api
        .tasks_for_caller(&agent)
        .await
        .expect("agent listing succeeds");
    assert!(assignments.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_duplicate_in_the_batch_leaves_the_store_unchanged(world: World) {
    let agent = UserId::new();
    let clock = DefaultClock;
    let carrier = |mc: &str| CarrierDetails {
        mc_number: mc.to_owned(),
        ..CarrierDetails::default()
    };
    let existing = Task::new_assigned(carrier("MC-100"), agent, &clock);
    world
        .tasks
        .insert_many(std::slice::from_ref(&existing))
        .await
        .expect("seed insert succeeds");

    let fresh = Task::new_assigned(carrier("MC-200"), agent, &clock);
    let batch = vec![fresh, existing.clone()];

    let result = world.tasks.insert_many(&batch).await;

    assert!(matches!(
        result,
        Err(TaskRepositoryError::DuplicateTask(id)) if id == existing.id()
    ));
    let remaining = world
        .tasks
        .find_by_agent(agent)
        .await
        .expect("listing succeeds");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining.first(), Some(&existing));
}
