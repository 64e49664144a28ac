use super::*;

/// Tests deleting an existing user.
///
/// Verifies that the document is removed and other users are kept.
///
/// Expected: Ok(true)
#[tokio::test]
async fn deletes_existing_user() -> Result<(), StoreError> {
    let users = vec![
        factory::user::UserFactory::new().user_id(1).build(),
        factory::user::UserFactory::new().user_id(2).build(),
    ];

    for_each_repository(users, |repo| async move {
        assert!(repo.delete(1).await?);
        assert!(repo.find_by_user_id(1).await?.is_none());
        assert!(repo.find_by_user_id(2).await?.is_some());

        Ok(())
    })
    .await
}

/// Tests deleting a non-existent user.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_nonexistent_user() -> Result<(), StoreError> {
    for_each_repository(Vec::new(), |repo| async move {
        assert!(!repo.delete(1).await?);

        Ok(())
    })
    .await
}
