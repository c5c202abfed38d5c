use super::*;

/// Tests filtering users by role and active flag.
///
/// Expected: Ok with only the matching users, ordered by id
#[tokio::test]
async fn filters_by_role_and_active() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::UserFactory::new(db)
        .role(UserRole::Admin)
        .build()
        .await?;
    let inactive = factory::user::UserFactory::new(db)
        .active(false)
        .build()
        .await?;
    let regular = factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    let admins = repo
        .find(&UserFilter {
            role: Some(UserRole::Admin),
            active: None,
        })
        .await?;
    assert_eq!(admins.iter().map(|u| u.id).collect::<Vec<_>>(), vec![admin.id]);

    let active = repo
        .find(&UserFilter {
            role: None,
            active: Some(true),
        })
        .await?;
    assert_eq!(
        active.iter().map(|u| u.id).collect::<Vec<_>>(),
        vec![admin.id, regular.id]
    );
    assert!(!active.iter().any(|u| u.id == inactive.id));

    Ok(())
}

/// Tests batch lookup by ids, skipping ids without a row.
///
/// Expected: Ok with the two existing users only
#[tokio::test]
async fn finds_by_ids_skipping_unknown() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let users = repo.find_by_ids(&[second.id, 9999, first.id]).await?;

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].id, first.id);
    assert_eq!(users[1].id, second.id);
    assert!(repo.find_by_ids(&[]).await?.is_empty());

    Ok(())
}

/// Tests lookup by login name.
///
/// Expected: Some for an existing name, None otherwise
#[tokio::test]
async fn finds_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("ada")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    assert_eq!(repo.find_by_username("ada").await?.map(|u| u.id), Some(user.id));
    assert!(repo.find_by_username("bob").await?.is_none());

    Ok(())
}
