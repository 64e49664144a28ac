use super::*;

/// Tests applying a partial update.
///
/// Verifies that only the provided fields change and everything else is preserved.
///
/// Expected: Ok(Some(User)) reflecting the change
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), StoreError> {
    let stored = factory::user::UserFactory::new()
        .user_id(1)
        .username("john")
        .email("john@example.com")
        .age(30)
        .order(factory::create_order(5.0, 1))
        .build();

    for_each_repository(vec![stored], |repo| async move {
        let changes = UserChanges {
            age: Some(31),
            ..Default::default()
        };

        let updated = repo.update(1, changes).await?.expect("user should exist");

        assert_eq!(updated.age, 31);
        assert_eq!(updated.username, "john");
        assert_eq!(updated.email, "john@example.com");
        assert_eq!(updated.password_hash, factory::user::DEFAULT_PASSWORD_HASH);
        assert_eq!(updated.orders.len(), 1);
        assert_eq!(repo.find_by_user_id(1).await?, Some(updated));

        Ok(())
    })
    .await
}

/// Tests that an empty change set leaves the document untouched.
///
/// Expected: Ok(Some(User)) equal to the stored user
#[tokio::test]
async fn empty_changes_leave_user_untouched() -> Result<(), StoreError> {
    let stored = factory::user::UserFactory::new().user_id(1).build();

    for_each_repository(vec![stored], |repo| async move {
        let before = repo.find_by_user_id(1).await?;

        let updated = repo.update(1, UserChanges::default()).await?;

        assert!(updated.is_some());
        assert_eq!(updated, before);

        Ok(())
    })
    .await
}

/// Tests updating a non-existent user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_user() -> Result<(), StoreError> {
    for_each_repository(Vec::new(), |repo| async move {
        let changes = UserChanges {
            age: Some(1),
            ..Default::default()
        };

        assert!(repo.update(42, changes).await?.is_none());

        Ok(())
    })
    .await
}

/// Tests changing a username to one held by another user.
///
/// Expected: Err(StoreError::DuplicateKey) and the stored document unchanged
#[tokio::test]
async fn rejects_username_taken_by_another_user() -> Result<(), StoreError> {
    let users = vec![
        factory::user::UserFactory::new().user_id(1).username("alice").build(),
        factory::user::UserFactory::new().user_id(2).username("bob").build(),
    ];

    for_each_repository(users, |repo| async move {
        let changes = UserChanges {
            username: Some("alice".to_string()),
            ..Default::default()
        };

        let result = repo.update(2, changes).await;

        assert!(matches!(result, Err(StoreError::DuplicateKey(_))));
        let bob = repo.find_by_user_id(2).await?.expect("user should exist");
        assert_eq!(bob.username, "bob");

        Ok(())
    })
    .await
}

/// Tests that a user may keep its own username in an update.
///
/// Expected: Ok(Some(User))
#[tokio::test]
async fn allows_resubmitting_own_username() -> Result<(), StoreError> {
    let stored = factory::user::UserFactory::new()
        .user_id(1)
        .username("alice")
        .build();

    for_each_repository(vec![stored], |repo| async move {
        let changes = UserChanges {
            username: Some("alice".to_string()),
            ..Default::default()
        };

        assert!(repo.update(1, changes).await?.is_some());

        Ok(())
    })
    .await
}
