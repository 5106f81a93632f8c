//! CouponDrop Server — round-robin coupon distribution service.
//!
//! Main entry point that wires all crates together and starts the server.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use coupondrop_auth::{MarkerIssuer, MarkerVerifier};
use coupondrop_core::config::AppConfig;
use coupondrop_core::error::AppError;
use coupondrop_core::types::CouponPool;
use coupondrop_database::repositories::{
    EligibilityRepository, HistoryRepository, RotationRepository,
};
use coupondrop_database::{DatabasePool, EligibilityStore, HistoryStore, RotationStore};
use coupondrop_service::{ClaimService, HistoryService};

#[tokio::main]
async fn main() {
    let env = std::env::var("COUPONDROP_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
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

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting CouponDrop v{}", env!("CARGO_PKG_VERSION"));

    let pool = CouponPool::from(&config.coupons);
    if pool.is_empty() {
        tracing::warn!("Coupon pool is empty; every claim will be rejected");
    }

    // ── Database connection + migrations ─────────────────────────
    let db = DatabasePool::connect(&config.database).await?;
    coupondrop_database::migration::run_migrations(db.pool()).await?;

    // ── Stores ───────────────────────────────────────────────────
    let rotation: Arc<dyn RotationStore> =
        Arc::new(RotationRepository::new(db.pool().clone()));
    let eligibility: Arc<dyn EligibilityStore> =
        Arc::new(EligibilityRepository::new(db.pool().clone()));
    let history: Arc<dyn HistoryStore> = Arc::new(HistoryRepository::new(db.pool().clone()));

    // ── Session marker signing ───────────────────────────────────
    let issuer = Arc::new(MarkerIssuer::new(&config.claim));
    let verifier = Arc::new(MarkerVerifier::new(&config.claim));

    // ── Services ─────────────────────────────────────────────────
    let claim_service = Arc::new(ClaimService::new(
        &config.claim,
        pool,
        rotation,
        eligibility,
        Arc::clone(&history),
        issuer,
        verifier,
    ));
    let history_service = Arc::new(HistoryService::new(history));

    // ── HTTP server ──────────────────────────────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = coupondrop_api::AppState {
        config: Arc::new(config),
        claim_service,
        history_service,
    };
    let app = coupondrop_api::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("CouponDrop server listening on {addr}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
    })
    .await
    .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db.close().await;
    tracing::info!("CouponDrop server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
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
