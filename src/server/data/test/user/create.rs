use super::*;

/// Tests creating a user from a complete record.
///
/// Expected: Ok with every field stored and timestamps set
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(record("grace")).await?;

    assert_eq!(user.username, "grace");
    assert_eq!(user.fullname, "Grace Hopper");
    assert_eq!(user.role, UserRole::User);
    assert!(user.active);
    assert_eq!(user.created_at, user.updated_at);

    Ok(())
}

/// Tests that the unique index on `username` rejects a second row.
///
/// Expected: Err and still one row in the table
#[tokio::test]
async fn rejects_duplicate_username_at_store_level() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(record("grace")).await?;
    let result = repo.create(record("grace")).await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::User::find().count(db).await?, 1);

    Ok(())
}
