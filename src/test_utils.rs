#[cfg(test)]
pub mod test_utils {
    use crate::config::initialize_app_state;
    use crate::router::create_router;
    use axum::Router;
    use std::fs;
    use tempfile::TempDir;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    pub const INDEX_MARKER: &str = "salesboard-test-index";

    /// Create a temporary directory that looks like a trunk build
    pub fn create_test_bundle() -> TempDir {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        fs::write(
            dir.path().join("index.html"),
            format!("<!DOCTYPE html><html><body><div id=\"{}\"></div></body></html>", INDEX_MARKER),
        )
        .expect("Failed to write index.html");
        fs::write(dir.path().join("app.js"), "console.log('salesboard');")
            .expect("Failed to write app.js");
        dir
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set.
    ///
    /// # Returns
    ///
    /// A guard that will clean up the subscriber when dropped.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app serving the given bundle directory
    pub fn setup_test_app_with_dir(dir: &TempDir) -> Router {
        let _guard = init_test_tracing();

        let state = initialize_app_state(dir.path()).expect("Failed to initialize app state");
        create_router(state)
    }

    /// Create axum app with a populated test bundle
    ///
    /// The returned TempDir must outlive the router.
    pub fn setup_test_app() -> (Router, TempDir) {
        let dir = create_test_bundle();
        let router = setup_test_app_with_dir(&dir);
        (router, dir)
    }
}
