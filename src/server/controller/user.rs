use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        user::{
            AddOrderPayloadDto, OrderListDto, TotalPriceDto, UserDto, UserPayloadDto,
            UserSummaryDto,
        },
    },
    server::{
        controller::json_body,
        error::{ApiError, ResultExt},
        model::user::{CreateUserParams, Order, UpdateUserParams},
        service::user::UserService,
        state::AppState,
        util::parse::parse_user_id,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "order";

/// Create a new user.
///
/// Validates the full user payload, hashes the password, and stores the user. The
/// response never contains the password.
///
/// # Arguments
/// - `state` - Application state containing the user repository
/// - `payload` - User fields, all required except `isActive` and `orders`
///
/// # Returns
/// - `200 OK` - User created
/// - `400 Bad Request` - Payload failed validation
/// - `409 Conflict` - `userId` or `username` already exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = UserPayloadDto,
    responses(
        (status = 200, description = "User created", body = ApiResponse<UserDto>),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 409, description = "User already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<UserPayloadDto>, JsonRejection>,
) -> Result<ApiResponse<UserDto>, ApiError> {
    const FAILED: &str = "User creation failed!";

    let params = json_body(payload)
        .and_then(CreateUserParams::from_dto)
        .context(FAILED)?;

    let user = UserService::new(state.users.as_ref(), &state.password_service)
        .create_user(params)
        .await
        .context(FAILED)?;

    Ok(ApiResponse::ok("User created successfully!", user.into_dto()))
}

/// List all users.
///
/// Returns the public summary of every user: username, full name, age, email and
/// address.
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Users fetched", body = ApiResponse<Vec<UserSummaryDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<UserSummaryDto>>, ApiError> {
    let users = UserService::new(state.users.as_ref(), &state.password_service)
        .list_users()
        .await
        .context("Users fetch failed!")?;

    let users_dto = users.into_iter().map(|u| u.into_dto()).collect();

    Ok(ApiResponse::ok("Users fetched successfully!", users_dto))
}

/// Get a single user.
///
/// # Returns
/// - `200 OK` - User with orders, without password
/// - `400 Bad Request` - `userId` is not a number
/// - `404 Not Found` - No user with that ID
#[utoipa::path(
    get,
    path = "/api/users/{userId}",
    tag = USER_TAG,
    params(
        ("userId" = i64, Path, description = "Numeric user ID")
    ),
    responses(
        (status = 200, description = "User fetched", body = ApiResponse<UserDto>),
        (status = 400, description = "Invalid user id", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<ApiResponse<UserDto>, ApiError> {
    const FAILED: &str = "User not found!";

    let user_id = parse_user_id(&user_id).context(FAILED)?;

    let user = UserService::new(state.users.as_ref(), &state.password_service)
        .get_user(user_id)
        .await
        .context(FAILED)?;

    Ok(ApiResponse::ok("User fetched successfully!", user.into_dto()))
}

/// Partially update a user.
///
/// Only the fields present in the body are validated and changed. Nested objects and
/// `orders` replace the stored value as a whole. The password is re-hashed only when it
/// actually changed.
///
/// # Arguments
/// - `state` - Application state containing the user repository
/// - `user_id` - Numeric ID of the user to update
/// - `payload` - Fields to change
///
/// # Returns
/// - `200 OK` - Updated user
/// - `400 Bad Request` - Invalid `userId` or payload
/// - `404 Not Found` - No user with that ID
/// - `409 Conflict` - New `userId` or `username` already taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/users/{userId}",
    tag = USER_TAG,
    params(
        ("userId" = i64, Path, description = "Numeric user ID")
    ),
    request_body = UserPayloadDto,
    responses(
        (status = 200, description = "User updated", body = ApiResponse<UserDto>),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "User already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    payload: Result<Json<UserPayloadDto>, JsonRejection>,
) -> Result<ApiResponse<UserDto>, ApiError> {
    const FAILED: &str = "User update failed";

    let user_id = parse_user_id(&user_id).context(FAILED)?;
    let params = json_body(payload)
        .and_then(UpdateUserParams::from_dto)
        .context(FAILED)?;

    let user = UserService::new(state.users.as_ref(), &state.password_service)
        .update_user(user_id, params)
        .await
        .context(FAILED)?;

    Ok(ApiResponse::ok("User updated successfully!", user.into_dto()))
}

/// Permanently delete a user.
///
/// # Returns
/// - `200 OK` - User deleted, `data` is `null`
/// - `404 Not Found` - No user with that ID
#[utoipa::path(
    delete,
    path = "/api/users/{userId}",
    tag = USER_TAG,
    params(
        ("userId" = i64, Path, description = "Numeric user ID")
    ),
    responses(
        (status = 200, description = "User deleted, data is null"),
        (status = 400, description = "Invalid user id", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<ApiResponse<()>, ApiError> {
    const FAILED: &str = "User delete failed";

    let user_id = parse_user_id(&user_id).context(FAILED)?;

    UserService::new(state.users.as_ref(), &state.password_service)
        .delete_user(user_id)
        .await
        .context(FAILED)?;

    Ok(ApiResponse::empty("User deleted successfully!"))
}

/// Append an order to a user.
///
/// The body is `{"orders": {productName, price, quantity}}`; a bare order object is also
/// accepted. Returns the user with the new order last.
///
/// # Returns
/// - `200 OK` - Updated user
/// - `400 Bad Request` - Invalid `userId` or order
/// - `404 Not Found` - No user with that ID
#[utoipa::path(
    put,
    path = "/api/users/{userId}/orders",
    tag = ORDER_TAG,
    params(
        ("userId" = i64, Path, description = "Numeric user ID")
    ),
    request_body = AddOrderPayloadDto,
    responses(
        (status = 200, description = "Order created", body = ApiResponse<UserDto>),
        (status = 400, description = "Invalid order data", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_order(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    payload: Result<Json<AddOrderPayloadDto>, JsonRejection>,
) -> Result<ApiResponse<UserDto>, ApiError> {
    const FAILED: &str = "Order creation failed!";

    let user_id = parse_user_id(&user_id).context(FAILED)?;
    let order = json_body(payload)
        .and_then(Order::from_add_order_dto)
        .context(FAILED)?;

    let user = UserService::new(state.users.as_ref(), &state.password_service)
        .add_order(user_id, order)
        .await
        .context(FAILED)?;

    Ok(ApiResponse::ok("Order created successfully!", user.into_dto()))
}

/// List the orders of a user.
#[utoipa::path(
    get,
    path = "/api/users/{userId}/orders",
    tag = ORDER_TAG,
    params(
        ("userId" = i64, Path, description = "Numeric user ID")
    ),
    responses(
        (status = 200, description = "Orders fetched", body = ApiResponse<OrderListDto>),
        (status = 400, description = "Invalid user id", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_orders(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<ApiResponse<OrderListDto>, ApiError> {
    const FAILED: &str = "Orders fetch failed!";

    let user_id = parse_user_id(&user_id).context(FAILED)?;

    let orders = UserService::new(state.users.as_ref(), &state.password_service)
        .list_orders(user_id)
        .await
        .context(FAILED)?;

    let orders_dto = OrderListDto {
        orders: orders.into_iter().map(|o| o.into_dto()).collect(),
    };

    Ok(ApiResponse::ok("Order fetched successfully!", orders_dto))
}

/// Compute the total price of a user's orders.
///
/// Sums `price * quantity` over every order.
///
/// # Returns
/// - `200 OK` - `{totalPrice}`
/// - `404 Not Found` - No user with that ID, or the user has no orders
#[utoipa::path(
    get,
    path = "/api/users/{userId}/orders/total-price",
    tag = ORDER_TAG,
    params(
        ("userId" = i64, Path, description = "Numeric user ID")
    ),
    responses(
        (status = 200, description = "Total price calculated", body = ApiResponse<TotalPriceDto>),
        (status = 400, description = "Invalid user id", body = ErrorDto),
        (status = 404, description = "User or orders not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_total_price(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<ApiResponse<TotalPriceDto>, ApiError> {
    const FAILED: &str = "Something went wrong";

    let user_id = parse_user_id(&user_id).context(FAILED)?;

    let total_price = UserService::new(state.users.as_ref(), &state.password_service)
        .total_order_price(user_id)
        .await
        .context(FAILED)?;

    Ok(ApiResponse::ok(
        "Total price calculated successfully!",
        TotalPriceDto { total_price },
    ))
}
