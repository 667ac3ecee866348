//! Serve command - Starts the HTTP server.

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: Config) -> std::io::Result<()> {
    tracing::info!("Starting server...");

    // Build the single store instance for this process
    let app_state = if args.seed {
        tracing::info!("Loading seed fixture");
        AppState::seeded()
    } else {
        AppState::empty()
    };

    // Build router
    let app = create_router(app_state);

    // Start server; CLI arguments override configuration
    let host = args.host.unwrap_or(config.server_host);
    let port = args.port.unwrap_or(config.server_port);
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app).await
}
