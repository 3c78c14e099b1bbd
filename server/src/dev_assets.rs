//! Development-only middleware serving the school profile image.
//!
//! SYSTEM CONTEXT
//! ==============
//! In production school images come from the asset pipeline; while developing
//! locally nothing serves them, so this layer answers exactly one route from
//! a file on disk and passes every other request through untouched.

use std::path::PathBuf;

use axum::extract::{Request, State};
use axum::http::{Method, StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

#[cfg(test)]
#[path = "dev_assets_test.rs"]
mod dev_assets_test;

/// The single route answered by this middleware.
pub const SCHOOL_IMAGE_ROUTE: &str = "/schools/school-image";

/// Configuration for the dev asset layer.
#[derive(Clone, Debug)]
pub struct DevAssetConfig {
    /// File served for [`SCHOOL_IMAGE_ROUTE`].
    pub image_path: PathBuf,
}

impl DevAssetConfig {
    /// Resolve from `SCHOOL_IMAGE_PATH`, defaulting to the repo-local asset.
    #[must_use]
    pub fn from_env() -> Self {
        let image_path = std::env::var("SCHOOL_IMAGE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../assets/school-image.png")
            });
        Self { image_path }
    }
}

/// Parse common boolean env values.
pub(crate) fn env_bool(key: &str) -> Option<bool> {
    let value = std::env::var(key).ok()?;
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Whether the dev asset layer should be installed. `DEV_ASSETS` overrides;
/// otherwise debug builds only.
#[must_use]
pub fn enabled() -> bool {
    env_bool("DEV_ASSETS").unwrap_or(cfg!(debug_assertions))
}

/// Serve the school image for GET/HEAD on the fixed route; hand everything
/// else to the inner service unmodified.
///
/// A missing file is a permanent 404 for that request: no retries, no
/// caching, the client re-requests after the file is restored.
pub async fn school_image(
    State(cfg): State<DevAssetConfig>,
    req: Request,
    next: Next,
) -> Response {
    let method_matches = req.method() == Method::GET || req.method() == Method::HEAD;
    if req.uri().path() != SCHOOL_IMAGE_ROUTE || !method_matches {
        return next.run(req).await;
    }

    match tokio::fs::read(&cfg.image_path).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, "image/png")], bytes).into_response(),
        Err(e) => {
            tracing::debug!(path = %cfg.image_path.display(), error = %e, "school image missing");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
