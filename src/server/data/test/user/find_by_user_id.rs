use super::*;

/// Tests finding an existing user by numeric ID.
///
/// Verifies that the repository returns the stored user, including the password hash
/// and embedded orders.
///
/// Expected: Ok(Some(User)) with matching user data
#[tokio::test]
async fn finds_existing_user() -> Result<(), StoreError> {
    let stored = factory::user::UserFactory::new()
        .user_id(1)
        .username("john")
        .order(factory::create_order(10.0, 2))
        .build();

    for_each_repository(vec![stored], |repo| async move {
        let user = repo.find_by_user_id(1).await?.expect("user should exist");

        assert_eq!(user.user_id, 1);
        assert_eq!(user.username, "john");
        assert_eq!(user.password_hash, factory::user::DEFAULT_PASSWORD_HASH);
        assert_eq!(user.orders, vec![order("Product", 10.0, 2)]);

        Ok(())
    })
    .await
}

/// Tests querying for a non-existent user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_user() -> Result<(), StoreError> {
    for_each_repository(vec![factory::create_user()], |repo| async move {
        assert!(repo.find_by_user_id(999_999).await?.is_none());

        Ok(())
    })
    .await
}
