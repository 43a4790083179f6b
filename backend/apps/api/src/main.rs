//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but request-level errors are
//! rendered by each crate's error type through `kernel::error::AppError`.

mod settings;

use axum::{
    Router, http,
    http::{Method, header},
    routing::get,
};
use platform::client::INIT_DATA_HEADER;
use settings::{Settings, StorageSettings};
use sqlx::postgres::PgPoolOptions;
use submission::{
    ConfiguredBlobStore, FsBlobStore, HttpBlobStore, PgSubmissionRepository, submission_router,
};
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,auth=info,submission=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::from_env()?;

    if !settings.auth.is_configured() {
        tracing::warn!("TELEGRAM_BOT_TOKEN not set, platform auth disabled");
    }
    tracing::info!(auth = ?settings.auth, "Auth configuration loaded");

    // Database connection
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&settings.database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Blob storage
    let blobs: ConfiguredBlobStore = match settings.storage {
        StorageSettings::Http(config) => {
            tracing::info!(
                base_url = %config.base_url,
                bucket = %config.bucket,
                "Using HTTP object storage"
            );
            HttpBlobStore::new(config)?.into()
        }
        StorageSettings::Fs(dir) => {
            tracing::info!(dir = %dir.display(), "Using local filesystem storage");
            FsBlobStore::new(dir).into()
        }
    };

    let submission_store = PgSubmissionRepository::new(pool.clone());

    // CORS configuration
    let allowed_origins: Vec<http::HeaderValue> = settings
        .frontend_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
            http::HeaderName::from_static(INIT_DATA_HEADER),
        ]));

    // Build router
    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .nest(
            "/api/application",
            submission_router(
                submission_store,
                blobs,
                settings.auth,
                settings.submission,
            ),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    tracing::info!("Listening on {}", settings.bind_addr);

    let listener = TcpListener::bind(settings.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
