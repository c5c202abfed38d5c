use super::*;

/// Tests that creating a task with a non-member assignee fails.
///
/// Expected: Err(Validation) and no task row written
#[tokio::test]
async fn rejects_non_member_assignee_on_create() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, project) = factory::helpers::create_project_with_member(db).await?;
    let outsider = factory::create_user(db).await?;

    let result = TaskService::new(db)
        .create(CreateWorkItemParams::new(
            project.id,
            new_item("Sneaky", Some(outsider.id)),
        ))
        .await;

    match result {
        Err(AppError::Validation(msg)) => {
            assert_eq!(
                msg,
                format!(
                    "User {} is not assigned to project {}",
                    outsider.id, project.id
                )
            )
        }
        other => panic!("unexpected result: {:?}", other),
    }
    assert_eq!(entity::prelude::Task::find().count(db).await?, 0);

    Ok(())
}

/// Tests the same rule for issues, which share the generic service.
///
/// Expected: Err(Validation) for the outsider, Ok for the member
#[tokio::test]
async fn applies_membership_rule_to_issues() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, project) = factory::helpers::create_project_with_member(db).await?;
    let outsider = factory::create_user(db).await?;

    let service = IssueService::new(db);

    let rejected = service
        .create(CreateWorkItemParams::new(
            project.id,
            new_item("Bug", Some(outsider.id)),
        ))
        .await;
    assert!(matches!(rejected, Err(AppError::Validation(_))));

    let issue = service
        .create(CreateWorkItemParams::new(
            project.id,
            new_item("Bug", Some(member.id)),
        ))
        .await?;
    assert_eq!(issue.assigned_to_id, Some(member.id));

    Ok(())
}

/// Tests creating a task in a project that does not exist.
///
/// Expected: Err(NotFound) naming the project
#[tokio::test]
async fn unknown_project_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TaskService::new(db)
        .create(CreateWorkItemParams::new(404, new_item("Lost", None)))
        .await;

    match result {
        Err(AppError::NotFound(msg)) => assert_eq!(msg, "Project 404 not found"),
        other => panic!("unexpected result: {:?}", other),
    }

    Ok(())
}

/// Tests that re-assigning a task to a non-member keeps the original assignee.
///
/// Expected: Err(Validation), assignee unchanged in the store
#[tokio::test]
async fn reassigning_to_non_member_keeps_original_assignee() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, project) = factory::helpers::create_project_with_member(db).await?;
    let outsider = factory::create_user(db).await?;
    let task = factory::task::TaskFactory::new(db, project.id)
        .assigned_to(Some(member.id))
        .build()
        .await?;

    let service = TaskService::new(db);
    let result = service
        .update(
            task.id,
            UpdateWorkItemParams {
                assigned_to_id: Some(Some(outsider.id)),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    let reloaded = service.get(task.id, WorkItemRelations::default()).await?;
    assert_eq!(reloaded.item.assigned_to_id, Some(member.id));

    Ok(())
}

/// Tests that unassigning needs no membership check.
///
/// Expected: Ok with no assignee
#[tokio::test]
async fn unassigning_is_always_allowed() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, project) = factory::helpers::create_project_with_member(db).await?;
    let task = factory::task::TaskFactory::new(db, project.id)
        .assigned_to(Some(member.id))
        .build()
        .await?;

    let updated = TaskService::new(db)
        .update(
            task.id,
            UpdateWorkItemParams {
                assigned_to_id: Some(None),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.assigned_to_id, None);

    Ok(())
}

/// Tests updating and deleting a task that does not exist.
///
/// Expected: Err(NotFound) naming the task
#[tokio::test]
async fn missing_task_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = TaskService::new(db);
    let update = service
        .update(
            9,
            UpdateWorkItemParams {
                title: Some("Ghost".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(update, Err(AppError::NotFound(ref msg)) if msg == "Task 9 not found"));
    assert!(matches!(service.delete(9).await, Err(AppError::NotFound(_))));
    assert!(matches!(
        IssueService::new(db).delete(9).await,
        Err(AppError::NotFound(ref msg)) if msg == "Issue 9 not found"
    ));

    Ok(())
}

/// Tests list filters and relation loading.
///
/// Expected: member scope and assignee filter narrow the list; relations are attached
#[tokio::test]
async fn lists_with_filters_and_relations() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (alice, alices_project) = factory::helpers::create_project_with_member(db).await?;
    let (_, other_project) = factory::helpers::create_project_with_member(db).await?;

    let assigned = factory::task::TaskFactory::new(db, alices_project.id)
        .assigned_to(Some(alice.id))
        .build()
        .await?;
    let open = factory::create_task(db, alices_project.id).await?;
    factory::create_task(db, other_project.id).await?;

    let service = TaskService::new(db);

    let scoped = service
        .list(
            WorkItemQuery {
                member_id: Some(alice.id),
                ..Default::default()
            },
            WorkItemRelations {
                project: true,
                assigned_to: true,
            },
        )
        .await?;

    assert_eq!(scoped.len(), 2);
    assert_eq!(scoped[0].item.id, assigned.id);
    assert_eq!(
        scoped[0].project.as_ref().map(|p| p.id),
        Some(alices_project.id)
    );
    assert_eq!(
        scoped[0].assigned_to.as_ref().map(|u| u.as_ref().map(|u| u.id)),
        Some(Some(alice.id))
    );
    assert_eq!(scoped[1].item.id, open.id);
    assert!(matches!(scoped[1].assigned_to, Some(None)));

    let by_assignee = service
        .list(
            WorkItemQuery {
                assigned_to_id: Some(alice.id),
                ..Default::default()
            },
            WorkItemRelations::default(),
        )
        .await?;
    assert_eq!(by_assignee.len(), 1);
    assert!(by_assignee[0].project.is_none());

    let mismatched = service
        .list(
            WorkItemQuery {
                member_id: Some(alice.id),
                project_id: Some(other_project.id),
                assigned_to_id: None,
            },
            WorkItemRelations::default(),
        )
        .await?;
    assert!(mismatched.is_empty());

    Ok(())
}
