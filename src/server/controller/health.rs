use crate::model::api::ApiResponse;

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Liveness check.
///
/// Returns a static success envelope without touching the database.
#[utoipa::path(
    get,
    path = "/",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Server is running")
    ),
)]
pub async fn health() -> ApiResponse<()> {
    ApiResponse::empty("Server is up and running")
}
