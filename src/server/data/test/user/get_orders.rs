use super::*;

/// Tests fetching the orders of a user.
///
/// Expected: Ok(Some(orders)) in stored order
#[tokio::test]
async fn returns_orders_of_user() -> Result<(), StoreError> {
    let stored = factory::user::UserFactory::new()
        .user_id(1)
        .order(factory::create_order(10.0, 2))
        .order(factory::create_order(5.0, 3))
        .build();

    for_each_repository(vec![stored], |repo| async move {
        let orders = repo.get_orders(1).await?.expect("user should exist");

        assert_eq!(
            orders,
            vec![order("Product", 10.0, 2), order("Product", 5.0, 3)]
        );

        Ok(())
    })
    .await
}

/// Tests fetching orders of a user without any.
///
/// Expected: Ok(Some(empty Vec))
#[tokio::test]
async fn returns_empty_orders_for_user_without_orders() -> Result<(), StoreError> {
    let stored = factory::user::UserFactory::new().user_id(1).build();

    for_each_repository(vec![stored], |repo| async move {
        assert_eq!(repo.get_orders(1).await?, Some(Vec::new()));

        Ok(())
    })
    .await
}

/// Tests fetching orders of a non-existent user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_user() -> Result<(), StoreError> {
    for_each_repository(Vec::new(), |repo| async move {
        assert!(repo.get_orders(1).await?.is_none());

        Ok(())
    })
    .await
}
