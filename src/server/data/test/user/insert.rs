use super::*;

/// Tests inserting a new user.
///
/// Verifies that the returned user matches what was inserted and that it can be read
/// back.
///
/// Expected: Ok(User)
#[tokio::test]
async fn inserts_new_user() -> Result<(), StoreError> {
    for_each_repository(Vec::new(), |repo| async move {
        let user = User::from_entity(factory::user::UserFactory::new().user_id(5).build());

        let inserted = repo.insert(user.clone()).await?;

        assert_eq!(inserted, user);
        assert_eq!(repo.find_by_user_id(5).await?, Some(user));

        Ok(())
    })
    .await
}

/// Tests inserting a user whose `userId` is already taken.
///
/// Expected: Err(StoreError::DuplicateKey) and the collection unchanged
#[tokio::test]
async fn rejects_duplicate_user_id() -> Result<(), StoreError> {
    let existing = factory::user::UserFactory::new().user_id(1).build();

    for_each_repository(vec![existing], |repo| async move {
        let duplicate = User::from_entity(factory::user::UserFactory::new().user_id(1).build());

        let result = repo.insert(duplicate).await;

        assert!(matches!(result, Err(StoreError::DuplicateKey(_))));
        assert_eq!(repo.get_all_summaries().await?.len(), 1);

        Ok(())
    })
    .await
}

/// Tests inserting a user whose `username` is already taken.
///
/// Expected: Err(StoreError::DuplicateKey)
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), StoreError> {
    let existing = factory::user::UserFactory::new().username("john").build();

    for_each_repository(vec![existing], |repo| async move {
        let duplicate =
            User::from_entity(factory::user::UserFactory::new().username("john").build());

        let result = repo.insert(duplicate).await;

        assert!(matches!(result, Err(StoreError::DuplicateKey(_))));

        Ok(())
    })
    .await
}
