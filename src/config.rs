use anyhow::{bail, Result};
use std::path::PathBuf;
use tracing::{info, warn};

use crate::schemas::AppState;

/// Default bind address
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

/// Default location of the trunk build output
pub const DEFAULT_STATIC_DIR: &str = "workspace/frontend/dist";

/// Initialize application state for the given bundle directory
///
/// A missing bundle is not fatal: the health endpoint still answers and
/// reports it. A path that exists but is not a directory is rejected.
pub fn initialize_app_state(static_dir: impl Into<PathBuf>) -> Result<AppState> {
    let static_dir = static_dir.into();

    if static_dir.exists() && !static_dir.is_dir() {
        bail!("Static path {} is not a directory", static_dir.display());
    }

    let state = AppState { static_dir };
    if state.bundle_present() {
        info!("Serving frontend bundle from {}", state.static_dir.display());
    } else {
        warn!(
            "No index.html in {}; build the frontend with `trunk build` first",
            state.static_dir.display()
        );
    }

    Ok(state)
}
