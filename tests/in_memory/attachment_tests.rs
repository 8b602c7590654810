//! Attachment policy behaviour at the facade: whole-set rejection before
//! any write, and readable references after a successful bind.

use super::helpers::{IMPORT_CSV, World, pdf_files, submit_payload};
use freightdesk::api::{DispatchError, ErrorKind};
use freightdesk::attachment::{AttachmentRejection, FileStore, RawFile};
use freightdesk::auth::{Principal, Role};
use freightdesk::task::domain::TaskStatus;
use rstest::{fixture, rstest};

struct Scene {
    world: World,
    agent: Principal,
    dispatcher: Principal,
    task_id: String,
}

/// A world with one imported task ready for submission.
#[fixture]
async fn scene() -> Scene {
    let world = World::new();
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

    Scene {
        world,
        agent,
        dispatcher,
        task_id,
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn too_many_files_reject_the_whole_submission(#[future(awt)] scene: Scene) {
    let result = scene
        .world
        .api
        .submit(
            &scene.agent,
            &scene.task_id,
            submit_payload(&scene.dispatcher),
            &pdf_files(6),
        )
        .await;

    let err = result.expect_err("must be rejected");
    assert!(matches!(
        err,
        DispatchError::AttachmentRejected(AttachmentRejection::TooManyFiles { max: 5, actual: 6 })
    ));

    // Nothing was written and the task never left its prior state.
    assert_eq!(scene.world.files.stored_count(), 0);
    let stored = scene
        .world
        .api
        .task(&scene.agent, &scene.task_id)
        .await
        .expect("fetch succeeds");
    assert_eq!(stored.status(), TaskStatus::Assigned);
    assert!(stored.submission().is_none());
}

#[rstest]
#[case("payload.exe")]
#[case("notes.txt")]
#[case("archive")]
#[case(".pdf")]
#[tokio::test(flavor = "multi_thread")]
async fn one_disallowed_file_blocks_every_file(#[future(awt)] scene: Scene, #[case] name: &str) {
    let mut files = pdf_files(2);
    files.push(RawFile::new(name, vec![0u8; 64]));

    let result = scene
        .world
        .api
        .submit(
            &scene.agent,
            &scene.task_id,
            submit_payload(&scene.dispatcher),
            &files,
        )
        .await;

    let err = result.expect_err("must be rejected");
    assert_eq!(err.kind(), ErrorKind::AttachmentRejected);
    assert_eq!(scene.world.files.stored_count(), 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn an_oversized_file_is_rejected_by_name(#[future(awt)] scene: Scene) {
    let files = vec![RawFile::new("manifest.pdf", vec![0u8; 10 * 1024 * 1024 + 1])];

    let result = scene
        .world
        .api
        .submit(
            &scene.agent,
            &scene.task_id,
            submit_payload(&scene.dispatcher),
            &files,
        )
        .await;

    let err = result.expect_err("must be rejected");
    assert!(matches!(
        err,
        DispatchError::AttachmentRejected(AttachmentRejection::FileTooLarge { ref name, .. })
            if name == "manifest.pdf"
    ));
    assert_eq!(scene.world.files.stored_count(), 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn bound_references_resolve_to_the_uploaded_bytes(#[future(awt)] scene: Scene) {
    let files = vec![
        RawFile::new("rate-confirmation.pdf", b"rate bytes".to_vec()),
        RawFile::new("bol.JPG", b"photo bytes".to_vec()),
    ];

    let task = scene
        .world
        .api
        .submit(
            &scene.agent,
            &scene.task_id,
            submit_payload(&scene.dispatcher),
            &files,
        )
        .await
        .expect("submit succeeds");

    let submission = task.submission().expect("submission recorded");
    assert_eq!(submission.documents.len(), 2);
    assert_eq!(scene.world.files.stored_count(), 2);

    let first_ref = submission.documents.first().expect("first reference");
    let first = scene
        .world
        .files
        .load(first_ref)
        .await
        .expect("stored file loads");
    assert_eq!(first, b"rate bytes");
    // Stored names keep the extension, lowercased.
    let second_ref = submission.documents.get(1).expect("second reference");
    assert!(second_ref.as_str().ends_with(".jpg"));
}
