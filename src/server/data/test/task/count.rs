use super::*;

/// Tests counting tasks by status, with and without a project scope.
///
/// Expected: pending and finished counts match the created tasks
#[tokio::test]
async fn counts_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, mine) = factory::helpers::create_project_with_member(db).await?;
    let other = factory::create_project(db, &[user.id]).await?;

    for status in [WorkStatus::New, WorkStatus::InProgress, WorkStatus::Closed] {
        factory::task::TaskFactory::new(db, mine.id)
            .status(status)
            .build()
            .await?;
    }
    factory::task::TaskFactory::new(db, other.id)
        .status(WorkStatus::InReview)
        .build()
        .await?;

    let repo = TaskRepository::new(db);

    assert_eq!(repo.count_by_status(None, &WorkStatus::PENDING).await?, 3);
    assert_eq!(
        repo.count_by_status(Some(&[mine.id][..]), &WorkStatus::PENDING)
            .await?,
        2
    );
    assert_eq!(
        repo.count_by_status(Some(&[mine.id][..]), &WorkStatus::FINISHED)
            .await?,
        1
    );
    assert_eq!(repo.count_by_status(Some(&[][..]), &WorkStatus::PENDING).await?, 0);

    Ok(())
}

/// Tests counting a project's tasks assigned to a set of users.
///
/// Expected: only assignments inside the project count
#[tokio::test]
async fn counts_assigned_in_project() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let project = factory::create_project(db, &[alice.id, bob.id]).await?;
    let other = factory::create_project(db, &[alice.id]).await?;

    factory::task::TaskFactory::new(db, project.id)
        .assigned_to(Some(alice.id))
        .build()
        .await?;
    factory::task::TaskFactory::new(db, other.id)
        .assigned_to(Some(alice.id))
        .build()
        .await?;

    let repo = TaskRepository::new(db);

    assert_eq!(repo.count_assigned(project.id, &[alice.id]).await?, 1);
    assert_eq!(repo.count_assigned(project.id, &[bob.id]).await?, 0);
    assert_eq!(repo.count_assigned(project.id, &[]).await?, 0);

    Ok(())
}
