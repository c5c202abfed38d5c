use super::*;

/// Tests that a member passes the guard.
///
/// Expected: Ok(Project)
#[tokio::test]
async fn allows_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, project) = factory::helpers::create_project_with_member(db).await?;

    let guarded = ProjectAccessGuard::new(db)
        .require_member(project.id, Some(user.id))
        .await?;

    assert_eq!(guarded.id, project.id);

    Ok(())
}

/// Tests that requests without a user are not restricted.
///
/// Expected: Ok(Project)
#[tokio::test]
async fn allows_unscoped_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, project) = factory::helpers::create_project_with_member(db).await?;

    let result = ProjectAccessGuard::new(db)
        .require_member(project.id, None)
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that a non-member is refused.
///
/// Expected: Err(AccessErr(NotProjectMember))
#[tokio::test]
async fn refuses_non_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, project) = factory::helpers::create_project_with_member(db).await?;
    let outsider = factory::create_user(db).await?;

    let result = ProjectAccessGuard::new(db)
        .require_member(project.id, Some(outsider.id))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AccessErr(AccessError::NotProjectMember { user_id, .. })) if user_id == outsider.id
    ));

    Ok(())
}

/// Tests the guard on a project that does not exist.
///
/// Expected: Err(NotFound) rather than a 403
#[tokio::test]
async fn missing_project_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = ProjectAccessGuard::new(db)
        .require_member(12, Some(user.id))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
