use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Directory holding the compiled frontend bundle
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn index_file(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }

    pub fn bundle_present(&self) -> bool {
        self.index_file().is_file()
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Whether the frontend bundle is available ("present" or "missing")
    pub bundle: String,
}
