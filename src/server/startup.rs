use mongodb::{bson::doc, Client};
use tracing_subscriber::{fmt, EnvFilter};

use crate::server::{config::Config, data::mongo::MongoUserRepository, error::AppError};

/// Installs the global tracing subscriber.
///
/// Reads the filter from `RUST_LOG`, falling back to `info` when unset or invalid.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).init();
}

/// Connects to MongoDB and prepares the users collection.
///
/// Opens a client from the connection string, selects the database named in the URL
/// (or the configured fallback), pings the server so an unreachable database fails
/// startup instead of the first request, and creates the unique indexes on `userId` and
/// `username`.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(MongoUserRepository)` - Repository over the ready collection
/// - `Err(AppError::StoreErr)` - Failed to connect, ping, or create indexes
pub async fn connect_to_database(config: &Config) -> Result<MongoUserRepository, AppError> {
    let client = Client::with_uri_str(&config.database_url).await?;

    let db = match config.database_name.as_deref() {
        Some(name) => client.database(name),
        None => client
            .default_database()
            .unwrap_or_else(|| client.database(config.fallback_database_name())),
    };

    db.run_command(doc! { "ping": 1 }).await?;
    tracing::info!("Connected to database {}", db.name());

    let repo = MongoUserRepository::new(&db);
    repo.ensure_indexes().await?;

    Ok(repo)
}

/// Resolves when the process receives Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }

        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
