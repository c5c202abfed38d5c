use super::*;

/// Tests deleting a single task.
///
/// Expected: Ok(true) once, Ok(false) afterwards
#[tokio::test]
async fn deletes_task() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, project) = factory::helpers::create_project_with_member(db).await?;
    let task = factory::create_task(db, project.id).await?;

    let repo = TaskRepository::new(db);
    assert!(repo.delete(task.id).await?);
    assert!(!repo.delete(task.id).await?);
    assert!(repo.find_by_id(task.id).await?.is_none());

    Ok(())
}

/// Tests deleting every task of one project.
///
/// Expected: the project's tasks are gone, other projects keep theirs
#[tokio::test]
async fn deletes_by_project() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, doomed) = factory::helpers::create_project_with_member(db).await?;
    let kept = factory::create_project(db, &[user.id]).await?;
    factory::create_task(db, doomed.id).await?;
    factory::create_task(db, doomed.id).await?;
    let survivor = factory::create_task(db, kept.id).await?;

    let repo = TaskRepository::new(db);
    assert_eq!(repo.delete_by_project(doomed.id).await?, 2);

    assert_eq!(entity::prelude::Task::find().count(db).await?, 1);
    assert!(repo.find_by_id(survivor.id).await?.is_some());

    Ok(())
}
