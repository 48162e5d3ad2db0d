use anyhow::Result;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing::{info, debug, trace, error};

use crate::config::initialize_app_state;
use crate::router::create_router;

pub async fn serve(bind_address: &str, static_dir: PathBuf) -> Result<()> {
    trace!("Entering serve function");
    info!("SalesBoard server starting up");
    debug!("Bind address: {}", bind_address);
    debug!("Static directory: {}", static_dir.display());

    // Initialize application state
    trace!("Initializing application state");
    let state = match initialize_app_state(static_dir) {
        Ok(state) => {
            debug!("Application state initialized successfully");
            state
        }
        Err(e) => {
            error!("Failed to initialize application state: {}", e);
            return Err(e);
        }
    };

    // Create router
    trace!("Creating application router");
    let app = create_router(state);
    debug!("Router created successfully");

    // Start server
    info!("Starting server on {}", bind_address);
    trace!("Attempting to bind TCP listener to {}", bind_address);
    let listener = match TcpListener::bind(bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", bind_address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", bind_address, e);
            return Err(e.into());
        }
    };

    info!("SalesBoard running on http://{}", bind_address);
    info!("Revenue dashboard at http://{}/, sales team at http://{}/sales", bind_address, bind_address);
    debug!("Server is ready to accept connections");

    trace!("Starting axum server");
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
