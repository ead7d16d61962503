//! ToolRent Server - Equipment Rental Management System
//!
//! REST API server for a small equipment-rental business.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use toolrent_server::{
    api, config::AppConfig, repository::Repository, services::Services, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("toolrent_server={},tower_http=debug", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting ToolRent Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool. WAL keeps readers and the writer
    // out of each other's way; foreign keys guard the instance rows.
    let connect_options = SqliteConnectOptions::from_str(&config.database.url)
        .expect("Invalid database URL")
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect_with(connect_options)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(
        repository,
        config.booking.clone(),
        config.notifier.clone(),
        config.summary.clone(),
    );

    // Spawn the once-a-day summary task
    if config.summary.enabled {
        tracing::info!(
            "Daily summary scheduled for {:02}:{:02} (UTC{:+})",
            config.summary.hour,
            config.summary.minute,
            config.summary.utc_offset_hours
        );
        tokio::spawn(services.summary.clone().run());
    }

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Equipment catalog (public reads, admin writes)
        .route("/equipment", get(api::equipment::list_equipment))
        .route("/equipment", post(api::equipment::create_equipment))
        .route("/equipment/:id", get(api::equipment::get_equipment))
        .route("/equipment/:id", put(api::equipment::update_equipment))
        .route("/equipment/:id", delete(api::equipment::delete_equipment))
        .route("/equipment/:id/quote", get(api::equipment::quote_equipment))
        // Bookings (public create, admin manage)
        .route("/bookings", post(api::bookings::create_booking))
        .route("/bookings", get(api::bookings::list_bookings))
        .route("/bookings/:id", get(api::bookings::get_booking))
        .route("/bookings/:id", put(api::bookings::update_booking))
        .route("/bookings/:id", delete(api::bookings::delete_booking))
        .route("/bookings/:id/status", put(api::bookings::set_booking_status))
        // Rentals
        .route("/rentals", get(api::rentals::list_rentals))
        .route("/rentals", post(api::rentals::create_rental))
        .route("/rentals/:id", get(api::rentals::get_rental))
        .route("/rentals/:id", put(api::rentals::update_rental))
        .route("/rentals/:id", delete(api::rentals::delete_rental))
        // Expenses
        .route("/expenses", get(api::expenses::list_expenses))
        .route("/expenses", post(api::expenses::create_expense))
        .route("/expenses/:id", get(api::expenses::get_expense))
        .route("/expenses/:id", put(api::expenses::update_expense))
        .route("/expenses/:id", delete(api::expenses::delete_expense))
        // Lockers
        .route("/lockers", get(api::lockers::list_lockers))
        .route("/lockers", post(api::lockers::create_locker))
        .route("/lockers/:id", get(api::lockers::get_locker))
        .route("/lockers/:id", put(api::lockers::update_locker))
        .route("/lockers/:id", delete(api::lockers::delete_locker))
        // Articles (public reads, admin writes)
        .route("/articles", get(api::articles::list_articles))
        .route("/articles/:slug", get(api::articles::get_article))
        .route("/admin/articles", get(api::articles::list_all_articles))
        .route("/admin/articles", post(api::articles::create_article))
        .route("/admin/articles/:id", put(api::articles::update_article))
        .route("/admin/articles/:id", delete(api::articles::delete_article))
        // Customers
        .route("/customers", get(api::customers::list_customers))
        // Contact form
        .route("/contact", post(api::contact::submit_contact))
        // Statistics
        .route("/stats", get(api::stats::get_stats))
        .route("/stats/monthly", get(api::stats::get_monthly_stats))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
