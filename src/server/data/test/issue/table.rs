use super::*;

/// Tests that issues are read from their own table.
///
/// Expected: the issue repository sees the issue but not the task, and vice versa
#[tokio::test]
async fn issues_and_tasks_are_separate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, project) = factory::helpers::create_project_with_member(db).await?;
    let issue = factory::create_issue(db, project.id).await?;
    let task = factory::create_task(db, project.id).await?;

    let issues = IssueRepository::new(db)
        .find(&WorkItemFilter::default())
        .await?;
    let tasks = TaskRepository::new(db).find(&WorkItemFilter::default()).await?;

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].title, issue.title);
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, task.title);

    Ok(())
}

/// Tests updating and deleting issues through the shared repository code.
///
/// Expected: the update applies and the project's issues are removed
#[tokio::test]
async fn updates_and_deletes_issues() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, project) = factory::helpers::create_project_with_member(db).await?;
    let issue = factory::create_issue(db, project.id).await?;

    let repo = IssueRepository::new(db);
    let updated = repo
        .update(
            issue.id,
            UpdateWorkItemParams {
                status: Some(WorkStatus::Completed),
                ..Default::default()
            },
        )
        .await?
        .unwrap();
    assert_eq!(updated.status, WorkStatus::Completed);

    assert_eq!(repo.delete_by_project(project.id).await?, 1);
    assert!(repo.find_by_id(issue.id).await?.is_none());

    Ok(())
}
