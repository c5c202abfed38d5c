use super::*;

/// Tests a partial update that also replaces the member list.
///
/// Expected: Ok(Some) with the new title, unchanged dates and the new members
#[tokio::test]
async fn updates_fields_and_replaces_members() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, project) = factory::helpers::create_project_with_member(db).await?;
    let newcomer = factory::create_user(db).await?;

    let repo = ProjectRepository::new(db);
    let updated = repo
        .update(
            project.id,
            UpdateProjectParams {
                title: Some("Renamed".to_string()),
                description: Some(None),
                member_ids: Some(vec![newcomer.id]),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.description, None);
    assert_eq!(updated.start_date, project.start_date);
    assert_eq!(updated.member_ids, vec![newcomer.id]);
    assert!(!updated.has_member(owner.id));

    Ok(())
}

/// Tests updating a project that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn missing_project_returns_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProjectRepository::new(db);
    let result = repo
        .update(
            7,
            UpdateProjectParams {
                title: Some("Ghost".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
