use std::{future::Future, sync::Arc};

use crate::server::{
    data::{memory::MemoryUserRepository, mongo::MongoUserRepository, user::UserRepository},
    error::store::StoreError,
    model::user::{Order, User, UserChanges},
};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod find_by_user_id;
mod get_all_summaries;
mod get_orders;
mod insert;
mod push_order;
mod total_order_price;
mod update;

/// Runs `case` against every repository implementation seeded with `users`.
///
/// The in-memory repository always runs. The MongoDB repository runs on a fresh
/// database with unique indexes when `MONGODB_TEST_URL` is set, and the database is
/// dropped afterwards even if the case fails.
async fn for_each_repository<F, Fut>(
    users: Vec<entity::user::Model>,
    case: F,
) -> Result<(), StoreError>
where
    F: Fn(Arc<dyn UserRepository>) -> Fut,
    Fut: Future<Output = Result<(), StoreError>>,
{
    case(Arc::new(MemoryUserRepository::with_users(users.clone()))).await?;

    let Some(test) = TestBuilder::new().with_users(users).build().await.unwrap() else {
        return Ok(());
    };

    let repo = MongoUserRepository::new(&test.db);
    repo.ensure_indexes().await?;

    let result = case(Arc::new(repo)).await;
    test.teardown().await.unwrap();

    result
}

/// Builds a domain order for pushing through the repository.
fn order(product_name: &str, price: f64, quantity: i64) -> Order {
    Order {
        product_name: product_name.to_string(),
        price,
        quantity,
    }
}
