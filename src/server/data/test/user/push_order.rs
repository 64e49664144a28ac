use super::*;

/// Tests appending an order.
///
/// Verifies that the order list grows by exactly one, the new order is last, and the
/// existing orders are untouched.
///
/// Expected: Ok(Some(User)) with the order appended
#[tokio::test]
async fn appends_order_to_existing_orders() -> Result<(), StoreError> {
    let stored = factory::user::UserFactory::new()
        .user_id(1)
        .order(
            factory::order::OrderFactory::new()
                .product_name("Pen")
                .price(2.0)
                .quantity(3)
                .build(),
        )
        .build();

    for_each_repository(vec![stored], |repo| async move {
        let updated = repo
            .push_order(1, order("Book", 10.0, 2))
            .await?
            .expect("user should exist");

        assert_eq!(
            updated.orders,
            vec![order("Pen", 2.0, 3), order("Book", 10.0, 2)]
        );

        Ok(())
    })
    .await
}

/// Tests appending to a user that has no orders yet.
///
/// Expected: Ok(Some(User)) with a single order
#[tokio::test]
async fn creates_order_list_for_user_without_orders() -> Result<(), StoreError> {
    let stored = factory::user::UserFactory::new().user_id(1).build();

    for_each_repository(vec![stored], |repo| async move {
        let updated = repo
            .push_order(1, order("Book", 10.0, 2))
            .await?
            .expect("user should exist");

        assert_eq!(updated.orders, vec![order("Book", 10.0, 2)]);

        Ok(())
    })
    .await
}

/// Tests that appending leaves other users untouched.
///
/// Expected: Ok with the other user's orders unchanged
#[tokio::test]
async fn leaves_other_users_untouched() -> Result<(), StoreError> {
    let users = vec![
        factory::user::UserFactory::new().user_id(1).build(),
        factory::user::UserFactory::new()
            .user_id(2)
            .order(factory::create_order(3.0, 1))
            .build(),
    ];

    for_each_repository(users, |repo| async move {
        repo.push_order(1, order("Book", 10.0, 2)).await?;

        let other = repo.find_by_user_id(2).await?.expect("user should exist");
        assert_eq!(other.orders, vec![order("Product", 3.0, 1)]);

        Ok(())
    })
    .await
}

/// Tests appending to a non-existent user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_user() -> Result<(), StoreError> {
    for_each_repository(Vec::new(), |repo| async move {
        assert!(repo.push_order(1, order("Book", 10.0, 2)).await?.is_none());

        Ok(())
    })
    .await
}
