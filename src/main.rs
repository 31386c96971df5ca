//! StayHub Server — multi-tenant hotel management backend.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

use stayhub_core::config::AppConfig;
use stayhub_core::error::AppError;

/// StayHub server command line.
#[derive(Debug, Parser)]
#[command(name = "stayhub-server", version, about = "StayHub hotel management server")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run migrations and start the HTTP server (default).
    Serve,
    /// Run pending database migrations and exit.
    Migrate,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let env = std::env::var("STAYHUB_ENV").unwrap_or_else(|_| "development".to_string());
    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    let result = match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => run(config).await,
        Command::Migrate => migrate(config).await,
    };

    if let Err(e) = result {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Run migrations only.
async fn migrate(config: AppConfig) -> Result<(), AppError> {
    let db_pool = stayhub_database::connection::create_pool(&config.database).await?;
    stayhub_database::migration::run_migrations(&db_pool).await
}

/// Main server run function.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting StayHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db_pool = stayhub_database::connection::create_pool(&config.database).await?;
    stayhub_database::migration::run_migrations(&db_pool).await?;

    // ── Step 2: Repositories ─────────────────────────────────────
    let hotel_repo = Arc::new(stayhub_database::repositories::HotelRepository::new(
        db_pool.clone(),
    ));
    let guest_repo = Arc::new(stayhub_database::repositories::GuestRepository::new(
        db_pool.clone(),
    ));
    let room_repo = Arc::new(stayhub_database::repositories::RoomRepository::new(
        db_pool.clone(),
    ));
    let reservation_repo = Arc::new(stayhub_database::repositories::ReservationRepository::new(
        db_pool.clone(),
    ));

    // ── Step 3: Services ─────────────────────────────────────────
    let hotel_service = Arc::new(stayhub_service::hotel::HotelService::new(Arc::clone(
        &hotel_repo,
    )));
    let guest_service = Arc::new(stayhub_service::guest::GuestService::new(
        Arc::clone(&guest_repo),
        Arc::clone(&reservation_repo),
    ));
    let room_service = Arc::new(stayhub_service::room::RoomService::new(
        Arc::clone(&room_repo),
        Arc::clone(&reservation_repo),
    ));
    let reservation_service = Arc::new(stayhub_service::reservation::ReservationService::new(
        Arc::clone(&reservation_repo),
        Arc::clone(&room_repo),
        Arc::clone(&guest_repo),
    ));
    let availability_service = Arc::new(stayhub_service::availability::AvailabilityService::new(
        Arc::clone(&reservation_repo),
        config.booking.room_policy,
    ));

    // ── Step 4: HTTP server ──────────────────────────────────────
    let app_state = stayhub_api::state::AppState {
        config: Arc::new(config.clone()),
        db_pool: db_pool.clone(),
        hotel_service,
        guest_service,
        room_service,
        reservation_service,
        availability_service,
    };

    let app = stayhub_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("StayHub server listening on {addr}");

    // ── Step 5: Graceful shutdown ────────────────────────────────
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db_pool.close().await;
    tracing::info!("StayHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
