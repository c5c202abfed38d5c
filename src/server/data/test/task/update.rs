use super::*;

/// Tests that a partial update leaves unspecified fields alone and clears nulls.
///
/// Expected: Ok(Some) with new status, cleared notes and unchanged title
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, project) = factory::helpers::create_project_with_member(db).await?;

    let repo = TaskRepository::new(db);
    let task = repo.create(project.id, new_task("Draft plan")).await?;

    let updated = repo
        .update(
            task.id,
            UpdateWorkItemParams {
                status: Some(WorkStatus::InReview),
                notes: Some(None),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, "Draft plan");
    assert_eq!(updated.status, WorkStatus::InReview);
    assert_eq!(updated.notes, None);
    assert_eq!(updated.priority, WorkPriority::High);

    Ok(())
}

/// Tests clearing the assignee of every task assigned to a user.
///
/// Expected: only that user's tasks become unassigned
#[tokio::test]
async fn unassigns_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let project = factory::create_project(db, &[alice.id, bob.id]).await?;

    let alices = factory::task::TaskFactory::new(db, project.id)
        .assigned_to(Some(alice.id))
        .build()
        .await?;
    let bobs = factory::task::TaskFactory::new(db, project.id)
        .assigned_to(Some(bob.id))
        .build()
        .await?;

    let repo = TaskRepository::new(db);
    assert_eq!(repo.unassign_user(alice.id).await?, 1);

    assert_eq!(repo.find_by_id(alices.id).await?.unwrap().assigned_to_id, None);
    assert_eq!(
        repo.find_by_id(bobs.id).await?.unwrap().assigned_to_id,
        Some(bob.id)
    );

    Ok(())
}
