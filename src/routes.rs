//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serves the `client` Leptos app with SSR, the compiled client bundle under
//! `/pkg`, and a liveness probe. There is no API surface; the widgets only
//! render state held in the browser.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::HostConfig;

/// Liveness + static asset routes, independent of Leptos rendering.
fn base_routes(site_root: &Path) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
}

fn leptos_options(config: &HostConfig) -> LeptosOptions {
    LeptosOptions::builder()
        .output_name(config.output_name.as_str())
        .site_root(config.site_root.as_str())
        .site_addr(config.socket_addr())
        .build()
}

/// Full application router: base routes + Leptos SSR pages.
pub fn app(config: &HostConfig) -> Router {
    let leptos_options = leptos_options(config);
    let routes = generate_route_list(client::app::App);
    tracing::debug!(count = routes.len(), "registered leptos routes");

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    base_routes(Path::new(&config.site_root))
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
