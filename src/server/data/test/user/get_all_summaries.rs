use super::*;

/// Tests listing summaries of all users.
///
/// Verifies that every stored user is returned with the public summary fields.
///
/// Expected: Ok(Vec<UserSummary>) in insertion order
#[tokio::test]
async fn lists_all_users() -> Result<(), StoreError> {
    let users = vec![
        factory::user::UserFactory::new().username("alice").age(25).build(),
        factory::user::UserFactory::new().username("bob").age(40).build(),
    ];

    for_each_repository(users, |repo| async move {
        let summaries = repo.get_all_summaries().await?;

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].username, "alice");
        assert_eq!(summaries[0].age, 25);
        assert_eq!(summaries[1].username, "bob");
        assert_eq!(summaries[1].address.city, "Anytown");

        Ok(())
    })
    .await
}

/// Tests listing with an empty collection.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_list_without_users() -> Result<(), StoreError> {
    for_each_repository(Vec::new(), |repo| async move {
        assert!(repo.get_all_summaries().await?.is_empty());

        Ok(())
    })
    .await
}
