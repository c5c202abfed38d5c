use super::*;

/// Tests creating a project with two members.
///
/// Expected: Ok with both membership rows written and member ids sorted
#[tokio::test]
async fn creates_project_with_members() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;

    let repo = ProjectRepository::new(db);
    let project = repo
        .create(NewProject {
            title: "Launch".to_string(),
            description: Some("Ship it".to_string()),
            start_date: date("2024-03-01"),
            due_date: date("2024-03-31"),
            member_ids: vec![second.id, first.id],
        })
        .await?;

    assert_eq!(project.title, "Launch");
    assert_eq!(project.start_date, date("2024-03-01"));
    assert_eq!(project.member_ids, vec![first.id, second.id]);

    let rows = entity::prelude::ProjectMember::find()
        .filter(entity::project_member::Column::ProjectId.eq(project.id))
        .count(db)
        .await?;
    assert_eq!(rows, 2);

    Ok(())
}
