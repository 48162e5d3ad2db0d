use crate::handlers::health::health_check;
use crate::schemas::AppState;
use axum::{routing::get, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Create application router with the health probe, the static bundle and middleware
///
/// Requests that match no file in the bundle get index.html, so the
/// frontend router handles `/sales` and any unknown path itself.
pub fn create_router(state: AppState) -> Router {
    let bundle = ServeDir::new(&state.static_dir).fallback(ServeFile::new(state.index_file()));

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Compiled frontend bundle
        .fallback_service(bundle)
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
