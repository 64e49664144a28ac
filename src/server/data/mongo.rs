//! MongoDB implementation of the user repository.
//!
//! Users live as single documents in the `users` collection with their orders embedded.
//! Uniqueness of `userId` and `username` is backed by unique indexes created at startup,
//! and the order total is computed server-side by an aggregation pipeline.

use async_trait::async_trait;
use entity::user::{column, OrderList, Summary};
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, to_bson, Bson, Document},
    options::{IndexOptions, ReturnDocument},
    Collection, Database, IndexModel,
};

use crate::server::{
    data::user::UserRepository,
    error::store::StoreError,
    model::user::{Order, User, UserChanges, UserSummary},
};

/// Repository over the MongoDB `users` collection.
///
/// Cloning is cheap; the driver shares its connection pool between clones.
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<entity::user::Model>,
}

impl MongoUserRepository {
    /// Creates a new MongoUserRepository on the given database.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(entity::user::COLLECTION),
        }
    }

    /// Creates the unique indexes on `userId` and `username` if missing.
    ///
    /// Safe to run on every startup; existing identical indexes are left alone.
    pub async fn ensure_indexes(&self) -> Result<(), StoreError> {
        let indexes = [column::USER_ID, column::USERNAME].map(|key| {
            let mut keys = Document::new();
            keys.insert(key, 1);

            IndexModel::builder()
                .keys(keys)
                .options(IndexOptions::builder().unique(true).build())
                .build()
        });

        self.collection.create_indexes(indexes).await?;
        Ok(())
    }
}

fn by_user_id(user_id: i64) -> Document {
    doc! { (column::USER_ID): user_id }
}

/// Projection for the user listing; drops the password, `_id`, and orders.
fn summary_projection() -> Document {
    doc! {
        (column::ID): 0,
        (column::USERNAME): 1,
        (column::FULL_NAME): 1,
        (column::AGE): 1,
        (column::EMAIL): 1,
        (column::ADDRESS): 1,
    }
}

/// Builds the `$set` document for a partial update.
fn set_document(changes: UserChanges) -> Result<Document, StoreError> {
    let mut set = Document::new();

    if let Some(user_id) = changes.user_id {
        set.insert(column::USER_ID, user_id);
    }
    if let Some(username) = changes.username {
        set.insert(column::USERNAME, username);
    }
    if let Some(password_hash) = changes.password_hash {
        set.insert(column::PASSWORD, password_hash);
    }
    if let Some(full_name) = changes.full_name {
        set.insert(column::FULL_NAME, to_bson(&full_name.into_entity())?);
    }
    if let Some(age) = changes.age {
        set.insert(column::AGE, age);
    }
    if let Some(email) = changes.email {
        set.insert(column::EMAIL, email);
    }
    if let Some(is_active) = changes.is_active {
        set.insert(column::IS_ACTIVE, is_active);
    }
    if let Some(hobbies) = changes.hobbies {
        set.insert(column::HOBBIES, hobbies);
    }
    if let Some(address) = changes.address {
        set.insert(column::ADDRESS, to_bson(&address.into_entity())?);
    }
    if let Some(orders) = changes.orders {
        let orders: Vec<entity::order::Model> =
            orders.into_iter().map(Order::into_entity).collect();
        set.insert(column::ORDERS, to_bson(&orders)?);
    }

    Ok(set)
}

/// Aggregation computing `Σ(price × quantity)` over one user's orders.
///
/// `$unwind` drops users without orders, so the pipeline yields no document for them.
pub fn total_price_pipeline(user_id: i64) -> Vec<Document> {
    vec![
        doc! { "$match": { (column::USER_ID): user_id } },
        doc! { "$unwind": "$orders" },
        doc! {
            "$group": {
                "_id": "$userId",
                "totalPrice": {
                    "$sum": { "$multiply": ["$orders.price", "$orders.quantity"] }
                },
            }
        },
        doc! { "$project": { "_id": 0, "totalPrice": 1 } },
    ]
}

/// Reads a numeric field regardless of the BSON number type the server chose.
fn read_number(document: &Document, key: &str) -> Option<f64> {
    match document.get(key)? {
        Bson::Double(value) => Some(*value),
        Bson::Int32(value) => Some(f64::from(*value)),
        Bson::Int64(value) => Some(*value as f64),
        _ => None,
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_user_id(&self, user_id: i64) -> Result<Option<User>, StoreError> {
        let entity = self.collection.find_one(by_user_id(user_id)).await?;

        Ok(entity.map(User::from_entity))
    }

    async fn insert(&self, user: User) -> Result<User, StoreError> {
        let mut entity = user.into_entity();

        let result = self.collection.insert_one(&entity).await?;
        entity.id = result.inserted_id.as_object_id();

        tracing::debug!("Inserted user {}", entity.user_id);

        Ok(User::from_entity(entity))
    }

    async fn get_all_summaries(&self) -> Result<Vec<UserSummary>, StoreError> {
        let summaries: Vec<Summary> = self
            .collection
            .clone_with_type::<Summary>()
            .find(doc! {})
            // insertion order
            .sort(doc! { (column::ID): 1 })
            .projection(summary_projection())
            .await?
            .try_collect()
            .await?;

        Ok(summaries.into_iter().map(UserSummary::from_entity).collect())
    }

    async fn update(&self, user_id: i64, changes: UserChanges) -> Result<Option<User>, StoreError> {
        if changes.is_empty() {
            return self.find_by_user_id(user_id).await;
        }

        let update = doc! { "$set": set_document(changes)? };
        let entity = self
            .collection
            .find_one_and_update(by_user_id(user_id), update)
            .return_document(ReturnDocument::After)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    async fn delete(&self, user_id: i64) -> Result<bool, StoreError> {
        let result = self.collection.delete_one(by_user_id(user_id)).await?;

        Ok(result.deleted_count > 0)
    }

    async fn push_order(&self, user_id: i64, order: Order) -> Result<Option<User>, StoreError> {
        let update = doc! { "$push": { (column::ORDERS): to_bson(&order.into_entity())? } };
        let entity = self
            .collection
            .find_one_and_update(by_user_id(user_id), update)
            .return_document(ReturnDocument::After)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    async fn get_orders(&self, user_id: i64) -> Result<Option<Vec<Order>>, StoreError> {
        let list = self
            .collection
            .clone_with_type::<OrderList>()
            .find_one(by_user_id(user_id))
            .projection(doc! { (column::ID): 0, (column::ORDERS): 1 })
            .await?;

        Ok(list.map(|list| list.orders.into_iter().map(Order::from_entity).collect()))
    }

    async fn total_order_price(&self, user_id: i64) -> Result<Option<f64>, StoreError> {
        let mut cursor = self
            .collection
            .aggregate(total_price_pipeline(user_id))
            .await?;

        let total = cursor
            .try_next()
            .await?
            .and_then(|document| read_number(&document, "totalPrice"));

        Ok(total)
    }
}
