use super::*;

/// Tests that only provided columns change.
///
/// Expected: Ok(Some) with new fullname, untouched username and a cleared avatar
#[tokio::test]
async fn updates_only_provided_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(NewUserRecord {
            avatar_url: Some("/uploads/avatars/1.png".to_string()),
            ..record("grace")
        })
        .await?;

    let updated = repo
        .update(
            user.id,
            UserChanges {
                fullname: Some("Rear Admiral Hopper".to_string()),
                avatar_url: Some(None),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.fullname, "Rear Admiral Hopper");
    assert_eq!(updated.username, "grace");
    assert_eq!(updated.avatar_url, None);
    assert!(updated.updated_at >= user.updated_at);

    Ok(())
}

/// Tests updating and deleting a user that does not exist.
///
/// Expected: Ok(None) and Ok(false)
#[tokio::test]
async fn missing_user_is_reported_as_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .update(
            42,
            UserChanges {
                active: Some(false),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());
    assert!(!repo.delete(42).await?);

    Ok(())
}
