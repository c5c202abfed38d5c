use super::*;

/// Tests that the member filter returns only that member's projects.
///
/// Expected: Ok with the two shared projects, not the third
#[tokio::test]
async fn filters_by_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let shared = factory::create_project(db, &[alice.id, bob.id]).await?;
    let own = factory::create_project(db, &[alice.id]).await?;
    factory::create_project(db, &[bob.id]).await?;

    let repo = ProjectRepository::new(db);
    let projects = repo
        .find(&ProjectFilter {
            member_id: Some(alice.id),
        })
        .await?;

    assert_eq!(
        projects.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![shared.id, own.id]
    );
    assert_eq!(projects[0].member_ids, vec![alice.id, bob.id]);

    let all = repo.find(&ProjectFilter::default()).await?;
    assert_eq!(all.len(), 3);

    Ok(())
}

/// Tests that a member without projects gets an empty list.
///
/// Expected: Ok(vec![])
#[tokio::test]
async fn member_without_projects_gets_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _) = factory::helpers::create_project_with_member(db).await?;
    let loner = factory::create_user(db).await?;

    let repo = ProjectRepository::new(db);
    let projects = repo
        .find(&ProjectFilter {
            member_id: Some(loner.id),
        })
        .await?;

    assert!(projects.is_empty());

    Ok(())
}

/// Tests getting a single project with its members.
///
/// Expected: Some for an existing id, None otherwise
#[tokio::test]
async fn finds_by_id_with_members() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, project) = factory::helpers::create_project_with_member(db).await?;

    let repo = ProjectRepository::new(db);
    let found = repo.find_by_id(project.id).await?.unwrap();

    assert_eq!(found.member_ids, vec![user.id]);
    assert!(found.has_member(user.id));
    assert!(repo.find_by_id(project.id + 100).await?.is_none());

    Ok(())
}
