use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use hivewatch_alerts::{AlertCheckConfig, AlertCheckScheduler, AlertLifecycle, PgAlertStore};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hivewatch_api::config::ServerConfig;
use hivewatch_api::router::build_app_router;
use hivewatch_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "hivewatch_api=debug,hivewatch_alerts=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    let alert_config = AlertCheckConfig::from_env();
    tracing::info!(
        enabled = alert_config.enabled,
        interval_secs = alert_config.interval.as_secs(),
        concurrency = alert_config.concurrency,
        "Loaded alert check configuration"
    );

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = hivewatch_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    hivewatch_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    hivewatch_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- Alert lifecycle ---
    let store = Arc::new(PgAlertStore::new(pool.clone()));
    let lifecycle = Arc::new(AlertLifecycle::new(store, alert_config.store_timeout));

    // Spawn the alert check scheduler.
    let alert_cancel = CancellationToken::new();
    let alert_handle = if alert_config.enabled {
        let scheduler = AlertCheckScheduler::new(Arc::clone(&lifecycle), alert_config);
        let cancel = alert_cancel.clone();
        Some(tokio::spawn(async move {
            scheduler.run(cancel).await;
        }))
    } else {
        tracing::info!("Alert check scheduler disabled");
        None
    };

    // --- App state ---
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        alerts: lifecycle,
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, cleaning up");

    alert_cancel.cancel();
    if let Some(handle) = alert_handle {
        let wait = Duration::from_secs(config.shutdown_timeout_secs);
        if tokio::time::timeout(wait, handle).await.is_err() {
            tracing::warn!("Alert check scheduler did not stop in time");
        } else {
            tracing::info!("Alert check scheduler stopped");
        }
    }

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
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
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
