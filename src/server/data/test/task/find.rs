use super::*;

/// Tests filtering tasks by project ids and assignees.
///
/// Expected: each filter narrows the result, no filter returns everything
#[tokio::test]
async fn filters_by_projects_and_assignees() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, first) = factory::helpers::create_project_with_member(db).await?;
    let second = factory::create_project(db, &[user.id]).await?;

    let assigned = factory::task::TaskFactory::new(db, first.id)
        .assigned_to(Some(user.id))
        .build()
        .await?;
    let unassigned = factory::create_task(db, first.id).await?;
    let elsewhere = factory::create_task(db, second.id).await?;

    let repo = TaskRepository::new(db);

    let in_first = repo
        .find(&WorkItemFilter {
            project_ids: Some(vec![first.id]),
            assigned_to_ids: None,
        })
        .await?;
    assert_eq!(
        in_first.iter().map(|t| t.id).collect::<Vec<_>>(),
        vec![assigned.id, unassigned.id]
    );

    let mine = repo
        .find(&WorkItemFilter {
            project_ids: None,
            assigned_to_ids: Some(vec![user.id]),
        })
        .await?;
    assert_eq!(mine.iter().map(|t| t.id).collect::<Vec<_>>(), vec![assigned.id]);

    let all = repo.find(&WorkItemFilter::default()).await?;
    assert_eq!(all.len(), 3);
    assert_eq!(all[2].id, elsewhere.id);

    let none = repo
        .find(&WorkItemFilter {
            project_ids: Some(Vec::new()),
            assigned_to_ids: None,
        })
        .await?;
    assert!(none.is_empty());

    Ok(())
}
