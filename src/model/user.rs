use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for creating or updating a user.
///
/// Every field is optional at the wire level so validation can report exactly which
/// field is missing instead of failing with a generic deserialization error. Creation
/// requires all fields except `isActive` and `orders`; updates apply only those present.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserPayloadDto {
    pub user_id: Option<i64>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub full_name: Option<FullNamePayloadDto>,
    pub age: Option<i64>,
    pub email: Option<String>,
    pub is_active: Option<bool>,
    pub hobbies: Option<Vec<String>>,
    pub address: Option<AddressPayloadDto>,
    pub orders: Option<Vec<OrderPayloadDto>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FullNamePayloadDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct AddressPayloadDto {
    pub street: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

/// Request body for appending an order, also used for each entry of `orders`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayloadDto {
    pub product_name: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}

/// Order wrapped under an `orders` key, as sent by clients of the add-order endpoint.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct OrderEnvelopePayloadDto {
    pub orders: OrderPayloadDto,
}

/// Request body for `PUT /api/users/{userId}/orders`.
///
/// `{"orders": {...}}` is the documented shape; a bare order object is still accepted.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(untagged)]
pub enum AddOrderPayloadDto {
    Wrapped(OrderEnvelopePayloadDto),
    Flat(OrderPayloadDto),
}

/// User as returned to clients. Never carries the password.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub user_id: i64,
    pub username: String,
    pub full_name: FullNameDto,
    pub age: i64,
    pub email: String,
    pub is_active: bool,
    pub hobbies: Vec<String>,
    pub address: AddressDto,
    pub orders: Vec<OrderDto>,
}

/// Reduced user view returned by the list endpoint.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSummaryDto {
    pub username: String,
    pub full_name: FullNameDto,
    pub age: i64,
    pub email: String,
    pub address: AddressDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FullNameDto {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AddressDto {
    pub street: String,
    pub city: String,
    pub country: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub product_name: String,
    pub price: f64,
    pub quantity: i64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct OrderListDto {
    pub orders: Vec<OrderDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TotalPriceDto {
    pub total_price: f64,
}
