use super::*;

/// Tests summing `price * quantity` across orders.
///
/// Orders (10.0 x 2) and (5.0 x 3) total 35.0.
///
/// Expected: Ok(Some(35.0))
#[tokio::test]
async fn sums_price_times_quantity() -> Result<(), StoreError> {
    let stored = factory::user::UserFactory::new()
        .user_id(1)
        .order(factory::create_order(10.0, 2))
        .order(factory::create_order(5.0, 3))
        .build();

    for_each_repository(vec![stored], |repo| async move {
        assert_eq!(repo.total_order_price(1).await?, Some(35.0));

        Ok(())
    })
    .await
}

/// Tests that zero-quantity orders contribute nothing.
///
/// Expected: Ok(Some(0.0))
#[tokio::test]
async fn zero_quantity_orders_total_zero() -> Result<(), StoreError> {
    let stored = factory::user::UserFactory::new()
        .user_id(1)
        .order(factory::create_order(99.0, 0))
        .build();

    for_each_repository(vec![stored], |repo| async move {
        assert_eq!(repo.total_order_price(1).await?, Some(0.0));

        Ok(())
    })
    .await
}

/// Tests the total for a user without orders.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_user_without_orders() -> Result<(), StoreError> {
    let stored = factory::user::UserFactory::new().user_id(1).build();

    for_each_repository(vec![stored], |repo| async move {
        assert!(repo.total_order_price(1).await?.is_none());

        Ok(())
    })
    .await
}

/// Tests the total for a non-existent user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_user() -> Result<(), StoreError> {
    for_each_repository(Vec::new(), |repo| async move {
        assert!(repo.total_order_price(1).await?.is_none());

        Ok(())
    })
    .await
}
