//! In-process implementation of the user repository.
//!
//! Stores entity documents in a `RwLock<Vec<_>>` and mirrors the MongoDB behaviour the
//! service relies on: unique `userId`/`username`, partial updates, `$push` of orders, and
//! the order total returning nothing for users without orders. Used by the test suite in
//! place of a running database.

use async_trait::async_trait;
use entity::user::Summary;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use crate::server::{
    data::user::UserRepository,
    error::store::StoreError,
    model::user::{Order, User, UserChanges, UserSummary},
};

/// Repository keeping user documents in memory.
#[derive(Default)]
pub struct MemoryUserRepository {
    users: RwLock<Vec<entity::user::Model>>,
}

impl MemoryUserRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository seeded with existing documents.
    ///
    /// Documents without an `_id` are assigned one.
    pub fn with_users(users: Vec<entity::user::Model>) -> Self {
        let users = users
            .into_iter()
            .map(|mut user| {
                user.id.get_or_insert_with(ObjectId::new);
                user
            })
            .collect();

        Self {
            users: RwLock::new(users),
        }
    }

    /// Snapshot of the stored documents, including password hashes.
    pub async fn documents(&self) -> Vec<entity::user::Model> {
        self.users.read().await.clone()
    }
}

/// Rejects `candidate` if another document (other than index `skip`) shares its unique keys.
fn check_unique(
    users: &[entity::user::Model],
    candidate: &entity::user::Model,
    skip: Option<usize>,
) -> Result<(), StoreError> {
    for (index, existing) in users.iter().enumerate() {
        if Some(index) == skip {
            continue;
        }
        if existing.user_id == candidate.user_id {
            return Err(StoreError::DuplicateKey(format!("userId: {}", candidate.user_id)));
        }
        if existing.username == candidate.username {
            return Err(StoreError::DuplicateKey(format!(
                "username: {}",
                candidate.username
            )));
        }
    }

    Ok(())
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_user_id(&self, user_id: i64) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;

        Ok(users
            .iter()
            .find(|user| user.user_id == user_id)
            .cloned()
            .map(User::from_entity))
    }

    async fn insert(&self, user: User) -> Result<User, StoreError> {
        let mut users = self.users.write().await;

        let mut entity = user.into_entity();
        check_unique(&users, &entity, None)?;
        entity.id = Some(ObjectId::new());

        users.push(entity.clone());

        Ok(User::from_entity(entity))
    }

    async fn get_all_summaries(&self) -> Result<Vec<UserSummary>, StoreError> {
        let users = self.users.read().await;

        Ok(users
            .iter()
            .map(Summary::from)
            .map(UserSummary::from_entity)
            .collect())
    }

    async fn update(&self, user_id: i64, changes: UserChanges) -> Result<Option<User>, StoreError> {
        let mut users = self.users.write().await;

        let Some(index) = users.iter().position(|user| user.user_id == user_id) else {
            return Ok(None);
        };

        let mut updated = users[index].clone();
        changes.apply(&mut updated);
        check_unique(&users, &updated, Some(index))?;

        users[index] = updated.clone();

        Ok(Some(User::from_entity(updated)))
    }

    async fn delete(&self, user_id: i64) -> Result<bool, StoreError> {
        let mut users = self.users.write().await;

        let before = users.len();
        users.retain(|user| user.user_id != user_id);

        Ok(users.len() < before)
    }

    async fn push_order(&self, user_id: i64, order: Order) -> Result<Option<User>, StoreError> {
        let mut users = self.users.write().await;

        let Some(user) = users.iter_mut().find(|user| user.user_id == user_id) else {
            return Ok(None);
        };
        user.orders.push(order.into_entity());

        Ok(Some(User::from_entity(user.clone())))
    }

    async fn get_orders(&self, user_id: i64) -> Result<Option<Vec<Order>>, StoreError> {
        let users = self.users.read().await;

        Ok(users
            .iter()
            .find(|user| user.user_id == user_id)
            .map(|user| user.orders.iter().cloned().map(Order::from_entity).collect()))
    }

    async fn total_order_price(&self, user_id: i64) -> Result<Option<f64>, StoreError> {
        let users = self.users.read().await;

        let total = users
            .iter()
            .find(|user| user.user_id == user_id)
            .filter(|user| !user.orders.is_empty())
            .map(|user| {
                user.orders
                    .iter()
                    .cloned()
                    .map(Order::from_entity)
                    .map(|order| order.subtotal())
                    .sum::<f64>()
            });

        Ok(total)
    }
}
