use super::*;

/// Tests that deleting a project also removes its membership rows.
///
/// Expected: Ok(true), no project row and no membership rows left
#[tokio::test]
async fn deletes_project_and_memberships() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, project) = factory::helpers::create_project_with_member(db).await?;

    let repo = ProjectRepository::new(db);
    assert!(repo.delete(project.id).await?);

    assert_eq!(entity::prelude::Project::find().count(db).await?, 0);
    assert_eq!(entity::prelude::ProjectMember::find().count(db).await?, 0);
    assert!(!repo.delete(project.id).await?);

    Ok(())
}
