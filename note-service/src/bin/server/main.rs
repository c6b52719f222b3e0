use std::sync::Arc;

use anyhow::anyhow;
use axum_extra::extract::cookie::Key;
use note_service::config::Config;
use note_service::domain::note::service::NoteService;
use note_service::domain::user::service::AuthService;
use note_service::inbound::http::router::create_router;
use note_service::outbound::database;
use note_service::outbound::repositories::SqliteNoteRepository;
use note_service::outbound::repositories::SqliteSessionRepository;
use note_service::outbound::repositories::SqliteUserRepository;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "note_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "note-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        database_url = %config.database.url,
        http_port = config.server.http_port,
        secure_cookie = config.session.secure_cookie,
        "Configuration loaded"
    );

    let cookie_key = Key::try_from(config.session.cookie_secret.as_bytes())
        .map_err(|e| anyhow!("session.cookie_secret must be at least 64 bytes: {e}"))?;

    let pool = database::connect(&config.database).await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "sqlite",
        "Database connection pool created"
    );

    database::migrate(&pool).await?;
    tracing::info!(database = "sqlite", "Database migrations completed");

    let user_repository = Arc::new(SqliteUserRepository::new(pool.clone()));
    let session_repository = Arc::new(SqliteSessionRepository::new(pool.clone()));
    let note_repository = Arc::new(SqliteNoteRepository::new(pool));

    let auth_service = Arc::new(AuthService::new(user_repository, session_repository));
    let note_service = Arc::new(NoteService::new(note_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(
        auth_service,
        note_service,
        cookie_key,
        config.session.secure_cookie,
    );

    if let Err(e) = axum::serve(http_listener, http_application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    tracing::info!("Server exited successfully");

    Ok(())
}
