use booking_server::config::ServerConfig;
use booking_server::registry::TrainRegistry;
use booking_server::web::{AppState, create_router};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();

    // Build app state
    let state = AppState::new(TrainRegistry::new());

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr = config.bind_addr;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(%addr, error = %e, "Failed to bind");
            std::process::exit(1);
        }
    };

    info!(%addr, "Train booking server listening");
    info!("  GET  /health                               - Health check");
    info!("  POST /trains                               - Register a train");
    info!("  GET  /trains/:id                           - Train summary");
    info!("  POST /trains/:id/tickets                   - Record a ticket");
    info!("  GET  /trains/:id/seats?from=&to=           - Available seats");
    info!("  GET  /trains/:id/boarding?station=         - Passengers boarding");
    info!("  GET  /trains/:id/oldest                    - Oldest passenger age");
    info!("  GET  /stations/:station/trains?start=&end= - Trains in time window");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "Server error");
        std::process::exit(1);
    }
}
