//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the health endpoint and Leptos SSR rendering under a single Axum
//! router, serves the WASM/CSS bundle from `/pkg`, and layers the
//! development asset middleware on top when enabled.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use thiserror::Error;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::dev_assets::{self, DevAssetConfig};

/// Errors raised while assembling the router.
#[derive(Debug, Error)]
pub enum RouterError {
    /// Missing or malformed Leptos configuration.
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),
}

/// Full application router: health + Leptos SSR + static assets, with the
/// dev asset layer applied when enabled.
///
/// # Errors
///
/// Returns [`RouterError::LeptosConfig`] if the Leptos configuration cannot
/// be loaded.
pub fn app() -> Result<Router, RouterError> {
    let conf = get_configuration(None).map_err(|e| RouterError::LeptosConfig(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Leptos static assets (WASM, CSS, JS) live under the site root's /pkg.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    if dev_assets::enabled() {
        let cfg = DevAssetConfig::from_env();
        tracing::info!(path = %cfg.image_path.display(), "dev asset middleware enabled");
        router = router.layer(axum::middleware::from_fn_with_state(cfg, dev_assets::school_image));
    }

    Ok(router)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
