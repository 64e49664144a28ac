use axum::{
    routing::{get, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDetailDto, ErrorDto},
        user::{
            AddOrderPayloadDto, AddressDto, AddressPayloadDto, FullNameDto, FullNamePayloadDto,
            OrderDto, OrderEnvelopePayloadDto, OrderListDto, OrderPayloadDto, TotalPriceDto,
            UserDto, UserPayloadDto, UserSummaryDto,
        },
    },
    server::{
        controller::{
            health::{self, HEALTH_TAG},
            user::{self, ORDER_TAG, USER_TAG},
        },
        state::AppState,
    },
};

/// OpenAPI documentation for the users API
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        user::create_user,
        user::get_users,
        user::get_user,
        user::update_user,
        user::delete_user,
        user::add_order,
        user::get_orders,
        user::get_total_price,
    ),
    components(schemas(
        UserPayloadDto,
        FullNamePayloadDto,
        AddressPayloadDto,
        OrderPayloadDto,
        OrderEnvelopePayloadDto,
        AddOrderPayloadDto,
        UserDto,
        UserSummaryDto,
        FullNameDto,
        AddressDto,
        OrderDto,
        OrderListDto,
        TotalPriceDto,
        ErrorDto,
        ErrorDetailDto,
    )),
    tags(
        (name = HEALTH_TAG, description = "Liveness check"),
        (name = USER_TAG, description = "User management"),
        (name = ORDER_TAG, description = "Orders embedded in users")
    )
)]
pub struct ApiDoc;

/// Builds the API routes without state.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::health))
        .route("/api/users", get(user::get_users).post(user::create_user))
        .route(
            "/api/users/{userId}",
            get(user::get_user)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        .route(
            "/api/users/{userId}/orders",
            put(user::add_order).get(user::get_orders),
        )
        .route(
            "/api/users/{userId}/orders/total-price",
            get(user::get_total_price),
        )
}

/// Builds the complete application: API routes, Swagger UI, CORS, and request tracing.
pub fn app(state: AppState) -> Router {
    router()
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
