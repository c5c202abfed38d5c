use super::*;

/// Tests creating a task in a project.
///
/// Expected: Ok with the provided fields and the owning project set
#[tokio::test]
async fn creates_task_in_project() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, project) = factory::helpers::create_project_with_member(db).await?;

    let repo = TaskRepository::new(db);
    let task = repo
        .create(
            project.id,
            NewWorkItem {
                assigned_to_id: Some(user.id),
                ..new_task("Draft plan")
            },
        )
        .await?;

    assert_eq!(task.title, "Draft plan");
    assert_eq!(task.project_id, project.id);
    assert_eq!(task.assigned_to_id, Some(user.id));
    assert_eq!(task.due_date.to_string(), "2024-03-15");
    assert_eq!(task.priority, WorkPriority::High);

    Ok(())
}
