use std::sync::Arc;

use tokio::net::TcpListener;

use user_orders::server::{
    config::Config, error::AppError, router, service::password::PasswordService, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_logging();

    let config = Config::from_env()?;

    let users = startup::connect_to_database(&config).await?;
    let password_service = PasswordService::new(config.password_hash_cost)?;
    let state = AppState::new(Arc::new(users), password_service);

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("Starting server on {}", listener.local_addr()?);

    axum::serve(listener, router::app(state))
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}
