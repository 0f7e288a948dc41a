use std::sync::Arc;

use anyhow::Result;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use sea_orm::{Database, DatabaseConnection};
use tower::ServiceBuilder;
use tower_http::{
    add_extension::AddExtensionLayer,
    cors::{CorsLayer, Origin},
    trace::TraceLayer,
};

use crate::config::Config;
use crate::constants::ALLOWED_ORIGINS;
use crate::handlers;

/// Shared by every in-flight request. `DatabaseConnection` is a pool.
pub(crate) struct State {
    pub(crate) db: DatabaseConnection,
}

impl State {
    /// Attempt to create a new State instance
    pub(crate) async fn try_new(config: &Config) -> Result<State> {
        let db = Database::connect(config.database_url.as_str()).await?;
        tracing::info!("DB connected!");

        Ok(State { db })
    }
}

/// Browser clients allowed to call the API during local development.
pub(crate) fn cors_layer() -> CorsLayer {
    let origins = ALLOWED_ORIGINS.into_iter().map(HeaderValue::from_static);

    CorsLayer::new()
        .allow_origin(Origin::list(origins))
        .allow_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}

pub(crate) fn router(state: Arc<State>) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health))
        .route(
            "/api/users",
            get(handlers::list_users).post(handlers::create_user),
        )
        .route("/api/swipes", post(handlers::create_swipe))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer())
                .layer(AddExtensionLayer::new(state)),
        )
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

/// Run the server.
pub async fn run() -> Result<()> {
    let config = Config::from_env()?;
    let state = Arc::new(State::try_new(&config).await?);

    let app = router(state);

    tracing::info!("Server starting on {}", config.addr);
    axum::Server::bind(&config.addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
