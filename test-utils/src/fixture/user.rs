//! User payload fixtures.

use serde_json::{json, Value};

/// Plaintext password used by [`create_payload`].
pub const DEFAULT_PASSWORD: &str = "secret123";

/// Creates a valid user creation body for the given `userId`.
///
/// The username and email are derived from the id so several payloads can be
/// created in one test without colliding.
///
/// # Example
///
/// ```rust,ignore
/// let body = fixture::user::create_payload(1);
/// assert_eq!(body["username"], "john_1");
/// ```
pub fn create_payload(user_id: i64) -> Value {
    json!({
        "userId": user_id,
        "username": format!("john_{}", user_id),
        "password": DEFAULT_PASSWORD,
        "fullName": {
            "firstName": "John",
            "lastName": "Doe"
        },
        "age": 30,
        "email": format!("john_{}@example.com", user_id),
        "isActive": true,
        "hobbies": ["reading", "travelling"],
        "address": {
            "street": "123 Main St",
            "city": "Anytown",
            "country": "USA"
        }
    })
}

/// Creates an order body for `PUT /api/users/{userId}/orders`.
///
/// The order is wrapped under `orders`, the shape clients send.
pub fn order_payload(product_name: &str, price: f64, quantity: i64) -> Value {
    json!({ "orders": flat_order_payload(product_name, price, quantity) })
}

/// Creates a bare order object without the `orders` wrapper.
pub fn flat_order_payload(product_name: &str, price: f64, quantity: i64) -> Value {
    json!({
        "productName": product_name,
        "price": price,
        "quantity": quantity
    })
}
