//! Lap Timer - A stopwatch with lap splits served over HTTP
//!
//! This is the main entry point for the lap-timer application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use lap_timer::{
    config::Config,
    state::AppState,
    api::create_router,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("lap_timer={},tower_http=info", config.log_level()))
        .init();

    info!("Starting lap-timer server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, tick={}ms",
          config.host, config.port, config.tick_ms);

    // Create application state; the ticker is only acquired on start/resume
    let state = Arc::new(AppState::new(&config));

    // Create HTTP router with all endpoints
    let app = create_router(Arc::clone(&state));

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET  /        - Render the stopwatch screen");
    info!("  POST /start   - Start the stopwatch");
    info!("  POST /lap     - Record a lap");
    info!("  POST /stop    - Stop the stopwatch");
    info!("  POST /resume  - Resume a stopped stopwatch");
    info!("  POST /reset   - Clear all laps");
    info!("  GET  /status  - Current timer, controls and laps");
    info!("  GET  /health  - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    let result = tokio::select! {
        result = server => {
            if let Err(e) = &result {
                tracing::error!("Server error: {}", e);
            }
            result.map_err(anyhow::Error::from)
        }
        signal = shutdown_signal() => {
            info!("Shutdown signal received");
            signal
        }
    };

    // Release the ticker on every exit path
    state.shutdown();

    info!("Server shutdown complete");
    result
}
