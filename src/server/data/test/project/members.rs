use super::*;

/// Tests the batched member lookup across several projects.
///
/// Expected: one entry per project that has members
#[tokio::test]
async fn maps_member_ids_per_project() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let first = factory::create_project(db, &[alice.id, bob.id]).await?;
    let second = factory::create_project(db, &[bob.id]).await?;
    let empty = factory::create_project(db, &[]).await?;

    let repo = ProjectRepository::new(db);
    let members = repo.member_ids(&[first.id, second.id, empty.id]).await?;

    assert_eq!(members.get(&first.id), Some(&vec![alice.id, bob.id]));
    assert_eq!(members.get(&second.id), Some(&vec![bob.id]));
    assert!(!members.contains_key(&empty.id));

    Ok(())
}

/// Tests counting distinct members across projects.
///
/// Expected: a user in two projects is counted once
#[tokio::test]
async fn counts_distinct_members() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let first = factory::create_project(db, &[alice.id, bob.id]).await?;
    let second = factory::create_project(db, &[alice.id]).await?;

    let repo = ProjectRepository::new(db);

    assert_eq!(repo.count_distinct_members(&[first.id, second.id]).await?, 2);
    assert_eq!(repo.count_distinct_members(&[second.id]).await?, 1);
    assert_eq!(repo.count_distinct_members(&[]).await?, 0);
    assert_eq!(
        repo.project_ids_for_member(alice.id).await?,
        vec![first.id, second.id]
    );

    Ok(())
}

/// Tests removing a user from every project.
///
/// Expected: the user's rows are gone, other members stay
#[tokio::test]
async fn removes_member_everywhere() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let project = factory::create_project(db, &[alice.id, bob.id]).await?;
    factory::create_project(db, &[alice.id]).await?;

    let repo = ProjectRepository::new(db);
    assert_eq!(repo.remove_member_everywhere(alice.id).await?, 2);

    let remaining = repo.find_by_id(project.id).await?.unwrap();
    assert_eq!(remaining.member_ids, vec![bob.id]);

    Ok(())
}
