use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::order;

/// Name of the collection holding user documents.
pub const COLLECTION: &str = "users";

/// Full user document as stored in the `users` collection.
///
/// `password` always holds a PHC-format hash, never plaintext.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: i64,
    pub username: String,
    pub password: String,
    pub full_name: FullName,
    pub age: i64,
    pub email: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub hobbies: Vec<String>,
    pub address: Address,
    #[serde(default)]
    pub orders: Vec<order::Model>,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullName {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub country: String,
}

/// Projection returned when listing users.
///
/// Leaves out the password, the internal `_id`, and the order list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub username: String,
    pub full_name: FullName,
    pub age: i64,
    pub email: String,
    pub address: Address,
}

/// Projection holding only a user's orders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderList {
    #[serde(default)]
    pub orders: Vec<order::Model>,
}

impl From<&Model> for Summary {
    fn from(model: &Model) -> Self {
        Self {
            username: model.username.clone(),
            full_name: model.full_name.clone(),
            age: model.age,
            email: model.email.clone(),
            address: model.address.clone(),
        }
    }
}

/// Stored key names of a user document.
pub mod column {
    pub const ID: &str = "_id";
    pub const USER_ID: &str = "userId";
    pub const USERNAME: &str = "username";
    pub const PASSWORD: &str = "password";
    pub const FULL_NAME: &str = "fullName";
    pub const AGE: &str = "age";
    pub const EMAIL: &str = "email";
    pub const IS_ACTIVE: &str = "isActive";
    pub const HOBBIES: &str = "hobbies";
    pub const ADDRESS: &str = "address";
    pub const ORDERS: &str = "orders";
}
