//! User domain models and parameters.
//!
//! Provides the domain model for a user with embedded orders, the reduced summary view
//! used for listings, and the validated parameter types produced from request payloads.
//! Conversions to entity documents and response DTOs live here so the other layers only
//! deal with domain types.

use crate::{
    model::user::{
        AddOrderPayloadDto, AddressDto, AddressPayloadDto, FullNameDto, FullNamePayloadDto,
        OrderDto, OrderPayloadDto, UserDto, UserPayloadDto, UserSummaryDto,
    },
    server::{
        error::validation::ValidationError,
        validation::{at_least, at_least_f64, email, min_length, non_empty, required},
    },
};

const PASSWORD_MIN_LENGTH: usize = 6;

/// User with profile, address, and embedded orders.
///
/// `password_hash` is never exposed through `into_dto`.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Numeric identifier, unique across the collection.
    pub user_id: i64,
    /// Login name, unique across the collection.
    pub username: String,
    /// Argon2id PHC string.
    pub password_hash: String,
    pub full_name: FullName,
    pub age: i64,
    pub email: String,
    pub is_active: bool,
    pub hobbies: Vec<String>,
    pub address: Address,
    pub orders: Vec<Order>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FullName {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub country: String,
}

/// Single purchase embedded in a user.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub product_name: String,
    /// Unit price, never negative.
    pub price: f64,
    /// Number of units, never negative.
    pub quantity: i64,
}

/// Safe subset of user fields returned when listing users.
#[derive(Debug, Clone, PartialEq)]
pub struct UserSummary {
    pub username: String,
    pub full_name: FullName,
    pub age: i64,
    pub email: String,
    pub address: Address,
}

impl User {
    /// Converts the user domain model to a DTO for API responses, dropping the password.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            user_id: self.user_id,
            username: self.username,
            full_name: self.full_name.into_dto(),
            age: self.age,
            email: self.email,
            is_active: self.is_active,
            hobbies: self.hobbies,
            address: self.address.into_dto(),
            orders: self.orders.into_iter().map(Order::into_dto).collect(),
        }
    }

    /// Converts an entity document to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            user_id: entity.user_id,
            username: entity.username,
            password_hash: entity.password,
            full_name: FullName::from_entity(entity.full_name),
            age: entity.age,
            email: entity.email,
            is_active: entity.is_active,
            hobbies: entity.hobbies,
            address: Address::from_entity(entity.address),
            orders: entity.orders.into_iter().map(Order::from_entity).collect(),
        }
    }

    /// Converts the domain model into a new entity document without an `_id`.
    pub fn into_entity(self) -> entity::user::Model {
        entity::user::Model {
            id: None,
            user_id: self.user_id,
            username: self.username,
            password: self.password_hash,
            full_name: self.full_name.into_entity(),
            age: self.age,
            email: self.email,
            is_active: self.is_active,
            hobbies: self.hobbies,
            address: self.address.into_entity(),
            orders: self.orders.into_iter().map(Order::into_entity).collect(),
        }
    }
}

impl FullName {
    pub fn into_dto(self) -> FullNameDto {
        FullNameDto {
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }

    pub fn from_entity(entity: entity::user::FullName) -> Self {
        Self {
            first_name: entity.first_name,
            last_name: entity.last_name,
        }
    }

    pub fn into_entity(self) -> entity::user::FullName {
        entity::user::FullName {
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }

    /// Validates a full name payload; `field` is the path used in error reports.
    pub fn from_dto(dto: Option<FullNamePayloadDto>, field: &str) -> Result<Self, ValidationError> {
        let dto = required(dto, field, "Full name is required.")?;

        Ok(Self {
            first_name: non_empty(
                dto.first_name,
                &format!("{field}.firstName"),
                "First name is required.",
            )?,
            last_name: non_empty(
                dto.last_name,
                &format!("{field}.lastName"),
                "Last name is required.",
            )?,
        })
    }
}

impl Address {
    pub fn into_dto(self) -> AddressDto {
        AddressDto {
            street: self.street,
            city: self.city,
            country: self.country,
        }
    }

    pub fn from_entity(entity: entity::user::Address) -> Self {
        Self {
            street: entity.street,
            city: entity.city,
            country: entity.country,
        }
    }

    pub fn into_entity(self) -> entity::user::Address {
        entity::user::Address {
            street: self.street,
            city: self.city,
            country: self.country,
        }
    }

    pub fn from_dto(dto: Option<AddressPayloadDto>, field: &str) -> Result<Self, ValidationError> {
        let dto = required(dto, field, "Address is required.")?;

        Ok(Self {
            street: non_empty(dto.street, &format!("{field}.street"), "Street is required.")?,
            city: non_empty(dto.city, &format!("{field}.city"), "City is required.")?,
            country: non_empty(dto.country, &format!("{field}.country"), "Country is required.")?,
        })
    }
}

impl Order {
    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            product_name: self.product_name,
            price: self.price,
            quantity: self.quantity,
        }
    }

    pub fn from_entity(entity: entity::order::Model) -> Self {
        Self {
            product_name: entity.product_name,
            price: entity.price,
            quantity: entity.quantity,
        }
    }

    pub fn into_entity(self) -> entity::order::Model {
        entity::order::Model {
            product_name: self.product_name,
            price: self.price,
            quantity: self.quantity,
        }
    }

    /// Validates an order payload.
    ///
    /// # Arguments
    /// - `dto` - Raw order payload
    /// - `prefix` - Path prepended to field names, e.g. `orders[2]`; empty for a bare order body
    pub fn from_dto(dto: OrderPayloadDto, prefix: &str) -> Result<Self, ValidationError> {
        let field = |name: &str| {
            if prefix.is_empty() {
                name.to_string()
            } else {
                format!("{prefix}.{name}")
            }
        };

        Ok(Self {
            product_name: non_empty(
                dto.product_name,
                &field("productName"),
                "Product name is required.",
            )?,
            price: at_least_f64(
                dto.price,
                0.0,
                &field("price"),
                "Price must be a non-negative number.",
            )?,
            quantity: at_least(
                dto.quantity,
                0,
                &field("quantity"),
                "Quantity must be a non-negative number.",
            )?,
        })
    }

    /// Validates the body of the add-order endpoint.
    ///
    /// Failures in a wrapped body are reported under `orders`, e.g. `orders.productName`.
    pub fn from_add_order_dto(dto: AddOrderPayloadDto) -> Result<Self, ValidationError> {
        match dto {
            AddOrderPayloadDto::Wrapped(envelope) => Self::from_dto(envelope.orders, "orders"),
            AddOrderPayloadDto::Flat(order) => Self::from_dto(order, ""),
        }
    }

    /// Line total of this order.
    pub fn subtotal(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

impl UserSummary {
    pub fn into_dto(self) -> UserSummaryDto {
        UserSummaryDto {
            username: self.username,
            full_name: self.full_name.into_dto(),
            age: self.age,
            email: self.email,
            address: self.address.into_dto(),
        }
    }

    pub fn from_entity(entity: entity::user::Summary) -> Self {
        Self {
            username: entity.username,
            full_name: FullName::from_entity(entity.full_name),
            age: entity.age,
            email: entity.email,
            address: Address::from_entity(entity.address),
        }
    }
}

fn validate_user_id(value: Option<i64>) -> Result<i64, ValidationError> {
    at_least(value, 1, "userId", "User ID must be a positive number.")
}

fn validate_username(value: Option<String>) -> Result<String, ValidationError> {
    non_empty(value, "username", "Username is required.")
}

fn validate_password(value: Option<String>) -> Result<String, ValidationError> {
    min_length(
        value,
        PASSWORD_MIN_LENGTH,
        "password",
        "Password must be at least 6 characters long.",
    )
}

fn validate_age(value: Option<i64>) -> Result<i64, ValidationError> {
    at_least(value, 0, "age", "Age must be a non-negative number.")
}

fn validate_email(value: Option<String>) -> Result<String, ValidationError> {
    email(value, "email", "Invalid email format.")
}

fn validate_hobbies(value: Option<Vec<String>>) -> Result<Vec<String>, ValidationError> {
    required(value, "hobbies", "Hobbies are required.")
}

fn validate_orders(value: Vec<OrderPayloadDto>) -> Result<Vec<Order>, ValidationError> {
    value
        .into_iter()
        .enumerate()
        .map(|(index, order)| Order::from_dto(order, &format!("orders[{index}]")))
        .collect()
}

/// Validated parameters for creating a user.
///
/// Holds the plaintext password; the service hashes it before building the stored `User`.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateUserParams {
    pub user_id: i64,
    pub username: String,
    pub password: String,
    pub full_name: FullName,
    pub age: i64,
    pub email: String,
    pub is_active: bool,
    pub hobbies: Vec<String>,
    pub address: Address,
    pub orders: Vec<Order>,
}

impl CreateUserParams {
    /// Validates a creation payload, reporting the first failing field.
    ///
    /// `isActive` defaults to `true` and `orders` to an empty list when omitted.
    pub fn from_dto(dto: UserPayloadDto) -> Result<Self, ValidationError> {
        Ok(Self {
            user_id: validate_user_id(dto.user_id)?,
            username: validate_username(dto.username)?,
            password: validate_password(dto.password)?,
            full_name: FullName::from_dto(dto.full_name, "fullName")?,
            age: validate_age(dto.age)?,
            email: validate_email(dto.email)?,
            is_active: dto.is_active.unwrap_or(true),
            hobbies: validate_hobbies(dto.hobbies)?,
            address: Address::from_dto(dto.address, "address")?,
            orders: validate_orders(dto.orders.unwrap_or_default())?,
        })
    }

    /// Builds the user to persist, substituting the hashed password.
    pub fn into_user(self, password_hash: String) -> User {
        User {
            user_id: self.user_id,
            username: self.username,
            password_hash,
            full_name: self.full_name,
            age: self.age,
            email: self.email,
            is_active: self.is_active,
            hobbies: self.hobbies,
            address: self.address,
            orders: self.orders,
        }
    }
}

/// Validated parameters for a partial user update.
///
/// `None` leaves the stored value unchanged. Nested objects and `orders` replace the
/// stored value as a whole.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateUserParams {
    pub user_id: Option<i64>,
    pub username: Option<String>,
    /// Plaintext password as submitted.
    pub password: Option<String>,
    pub full_name: Option<FullName>,
    pub age: Option<i64>,
    pub email: Option<String>,
    pub is_active: Option<bool>,
    pub hobbies: Option<Vec<String>>,
    pub address: Option<Address>,
    pub orders: Option<Vec<Order>>,
}

impl UpdateUserParams {
    /// Validates only the fields present in an update payload.
    pub fn from_dto(dto: UserPayloadDto) -> Result<Self, ValidationError> {
        Ok(Self {
            user_id: dto.user_id.map(|v| validate_user_id(Some(v))).transpose()?,
            username: dto.username.map(|v| validate_username(Some(v))).transpose()?,
            password: dto.password.map(|v| validate_password(Some(v))).transpose()?,
            full_name: dto
                .full_name
                .map(|v| FullName::from_dto(Some(v), "fullName"))
                .transpose()?,
            age: dto.age.map(|v| validate_age(Some(v))).transpose()?,
            email: dto.email.map(|v| validate_email(Some(v))).transpose()?,
            is_active: dto.is_active,
            hobbies: dto.hobbies,
            address: dto
                .address
                .map(|v| Address::from_dto(Some(v), "address"))
                .transpose()?,
            orders: dto.orders.map(validate_orders).transpose()?,
        })
    }
}

/// Field changes handed to the repository for a partial update.
///
/// Same shape as `UpdateUserParams` except the password is already hashed, and only
/// present when it actually changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserChanges {
    pub user_id: Option<i64>,
    pub username: Option<String>,
    pub password_hash: Option<String>,
    pub full_name: Option<FullName>,
    pub age: Option<i64>,
    pub email: Option<String>,
    pub is_active: Option<bool>,
    pub hobbies: Option<Vec<String>>,
    pub address: Option<Address>,
    pub orders: Option<Vec<Order>>,
}

impl UserChanges {
    /// Builds the change set from validated params and an already computed password hash.
    pub fn from_params(params: UpdateUserParams, password_hash: Option<String>) -> Self {
        Self {
            user_id: params.user_id,
            username: params.username,
            password_hash,
            full_name: params.full_name,
            age: params.age,
            email: params.email,
            is_active: params.is_active,
            hobbies: params.hobbies,
            address: params.address,
            orders: params.orders,
        }
    }

    /// `true` when no field would change.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Applies the changes to an entity document in place.
    pub fn apply(self, entity: &mut entity::user::Model) {
        if let Some(user_id) = self.user_id {
            entity.user_id = user_id;
        }
        if let Some(username) = self.username {
            entity.username = username;
        }
        if let Some(password_hash) = self.password_hash {
            entity.password = password_hash;
        }
        if let Some(full_name) = self.full_name {
            entity.full_name = full_name.into_entity();
        }
        if let Some(age) = self.age {
            entity.age = age;
        }
        if let Some(email) = self.email {
            entity.email = email;
        }
        if let Some(is_active) = self.is_active {
            entity.is_active = is_active;
        }
        if let Some(hobbies) = self.hobbies {
            entity.hobbies = hobbies;
        }
        if let Some(address) = self.address {
            entity.address = address.into_entity();
        }
        if let Some(orders) = self.orders {
            entity.orders = orders.into_iter().map(Order::into_entity).collect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{model::user::OrderEnvelopePayloadDto, server::error::validation::Constraint};

    fn valid_payload() -> UserPayloadDto {
        UserPayloadDto {
            user_id: Some(1),
            username: Some("john_doe".to_string()),
            password: Some("secret123".to_string()),
            full_name: Some(FullNamePayloadDto {
                first_name: Some("John".to_string()),
                last_name: Some("Doe".to_string()),
            }),
            age: Some(30),
            email: Some("john@example.com".to_string()),
            is_active: Some(true),
            hobbies: Some(vec!["reading".to_string()]),
            address: Some(AddressPayloadDto {
                street: Some("123 Main St".to_string()),
                city: Some("Anytown".to_string()),
                country: Some("USA".to_string()),
            }),
            orders: None,
        }
    }

    #[test]
    fn accepts_valid_payload_without_orders() {
        let params = CreateUserParams::from_dto(valid_payload()).unwrap();

        assert_eq!(params.user_id, 1);
        assert_eq!(params.full_name.first_name, "John");
        assert!(params.orders.is_empty());
    }

    #[test]
    fn defaults_is_active_to_true() {
        let payload = UserPayloadDto {
            is_active: None,
            ..valid_payload()
        };

        assert!(CreateUserParams::from_dto(payload).unwrap().is_active);
    }

    #[test]
    fn trims_string_fields() {
        let payload = UserPayloadDto {
            username: Some("  john_doe ".to_string()),
            ..valid_payload()
        };

        assert_eq!(CreateUserParams::from_dto(payload).unwrap().username, "john_doe");
    }

    #[test]
    fn rejects_negative_age() {
        let payload = UserPayloadDto {
            age: Some(-1),
            ..valid_payload()
        };

        let err = CreateUserParams::from_dto(payload).unwrap_err();
        assert_eq!(err.field, "age");
        assert_eq!(err.constraint, Constraint::TooSmall);
        assert_eq!(err.message, "Age must be a non-negative number.");
    }

    #[test]
    fn rejects_user_id_below_one() {
        let payload = UserPayloadDto {
            user_id: Some(0),
            ..valid_payload()
        };

        let err = CreateUserParams::from_dto(payload).unwrap_err();
        assert_eq!(err.field, "userId");
        assert_eq!(err.message, "User ID must be a positive number.");
    }

    #[test]
    fn rejects_malformed_email() {
        let payload = UserPayloadDto {
            email: Some("john.example.com".to_string()),
            ..valid_payload()
        };

        let err = CreateUserParams::from_dto(payload).unwrap_err();
        assert_eq!(err.field, "email");
        assert_eq!(err.constraint, Constraint::InvalidString);
    }

    #[test]
    fn rejects_short_password() {
        let payload = UserPayloadDto {
            password: Some("12345".to_string()),
            ..valid_payload()
        };

        let err = CreateUserParams::from_dto(payload).unwrap_err();
        assert_eq!(err.field, "password");
        assert_eq!(err.message, "Password must be at least 6 characters long.");
    }

    #[test]
    fn reports_nested_field_path() {
        let payload = UserPayloadDto {
            full_name: Some(FullNamePayloadDto {
                first_name: Some("John".to_string()),
                last_name: Some("".to_string()),
            }),
            ..valid_payload()
        };

        let err = CreateUserParams::from_dto(payload).unwrap_err();
        assert_eq!(err.field, "fullName.lastName");
        assert_eq!(err.message, "Last name is required.");
    }

    #[test]
    fn requires_hobbies() {
        let payload = UserPayloadDto {
            hobbies: None,
            ..valid_payload()
        };

        let err = CreateUserParams::from_dto(payload).unwrap_err();
        assert_eq!(err.field, "hobbies");
        assert_eq!(err.constraint, Constraint::Required);
    }

    #[test]
    fn reports_first_failing_field_in_declaration_order() {
        let payload = UserPayloadDto {
            username: None,
            age: Some(-5),
            ..valid_payload()
        };

        let err = CreateUserParams::from_dto(payload).unwrap_err();
        assert_eq!(err.field, "username");
    }

    #[test]
    fn rejects_negative_order_values_with_index() {
        let payload = UserPayloadDto {
            orders: Some(vec![
                OrderPayloadDto {
                    product_name: Some("Book".to_string()),
                    price: Some(10.0),
                    quantity: Some(1),
                },
                OrderPayloadDto {
                    product_name: Some("Pen".to_string()),
                    price: Some(-2.5),
                    quantity: Some(1),
                },
            ]),
            ..valid_payload()
        };

        let err = CreateUserParams::from_dto(payload).unwrap_err();
        assert_eq!(err.field, "orders[1].price");
        assert_eq!(err.message, "Price must be a non-negative number.");
    }

    #[test]
    fn rejects_negative_quantity_on_bare_order() {
        let err = Order::from_dto(
            OrderPayloadDto {
                product_name: Some("Pen".to_string()),
                price: Some(2.0),
                quantity: Some(-1),
            },
            "",
        )
        .unwrap_err();

        assert_eq!(err.field, "quantity");
        assert_eq!(err.constraint, Constraint::TooSmall);
    }

    #[test]
    fn wrapped_order_reports_fields_under_orders() {
        let err = Order::from_add_order_dto(AddOrderPayloadDto::Wrapped(
            OrderEnvelopePayloadDto {
                orders: OrderPayloadDto {
                    product_name: None,
                    price: Some(2.0),
                    quantity: Some(1),
                },
            },
        ))
        .unwrap_err();

        assert_eq!(err.field, "orders.productName");
        assert_eq!(err.constraint, Constraint::Required);
    }

    #[test]
    fn add_order_body_accepts_wrapped_and_flat_json() {
        let wrapped: AddOrderPayloadDto = serde_json::from_value(serde_json::json!({
            "orders": { "productName": "Book", "price": 10.0, "quantity": 2 }
        }))
        .unwrap();
        let flat: AddOrderPayloadDto = serde_json::from_value(serde_json::json!({
            "productName": "Book", "price": 10.0, "quantity": 2
        }))
        .unwrap();

        let expected = Order {
            product_name: "Book".to_string(),
            price: 10.0,
            quantity: 2,
        };
        assert!(matches!(wrapped, AddOrderPayloadDto::Wrapped(_)));
        assert_eq!(Order::from_add_order_dto(wrapped).unwrap(), expected);
        assert_eq!(Order::from_add_order_dto(flat).unwrap(), expected);
    }

    #[test]
    fn update_validates_only_present_fields() {
        let params = UpdateUserParams::from_dto(UserPayloadDto {
            age: Some(31),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(params.age, Some(31));
        assert!(params.username.is_none());
        assert!(params.full_name.is_none());

        let err = UpdateUserParams::from_dto(UserPayloadDto {
            email: Some("nope".to_string()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err.field, "email");
    }

    #[test]
    fn empty_changes_are_detected() {
        assert!(UserChanges::default().is_empty());
        assert!(!UserChanges {
            age: Some(1),
            ..Default::default()
        }
        .is_empty());
    }

    #[test]
    fn dto_never_carries_password() {
        let params = CreateUserParams::from_dto(valid_payload()).unwrap();
        let user = params.into_user("$argon2id$hash".to_string());
        let json = serde_json::to_value(user.into_dto()).unwrap();

        assert!(json.get("password").is_none());
        assert_eq!(json["userId"], 1);
        assert_eq!(json["fullName"]["firstName"], "John");
    }

    #[test]
    fn subtotal_multiplies_price_and_quantity() {
        let order = Order {
            product_name: "Book".to_string(),
            price: 10.0,
            quantity: 2,
        };

        assert_eq!(order.subtotal(), 20.0);
    }
}
