//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host serves the Leptos app (SSR + hydration assets under `/pkg`), a
//! health check that a second launch uses to find this instance, the
//! launch-token exchange and the cookie-guarded `/api`. Every response carries
//! the cache and content security policy headers.

use std::path::PathBuf;

use axum::Router;
use axum::extract::Request;
use axum::http::header::{CACHE_CONTROL, CONTENT_SECURITY_POLICY};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::{ConfigError, ServerConfig};
use crate::session::{self, HostState};

pub const CACHE_POLICY: &str = "private, no-cache, no-store, max-age=0, must-revalidate";

pub const CONTENT_POLICY: &str = concat!(
    "default-src 'self'; ",
    "connect-src 'self'; ",
    "style-src 'self' 'unsafe-inline'; ",
    "font-src data:; ",
    "img-src 'self' https://static.staticwars.com/quaggans/; ",
    "script-src 'self' 'unsafe-inline'",
);

/// Health check, token exchange and the guarded API.
pub fn host_routes(host: HostState) -> Router {
    let api = Router::new()
        .route("/shutdown", post(session::shutdown))
        .route_layer(middleware::from_fn_with_state(host.clone(), session::require_token));

    Router::new()
        .route("/health", get(health))
        .route("/auth/{token}", get(session::authenticate))
        .nest("/api", api)
        .with_state(host)
}

/// Host routes, SSR routes and static assets behind the header middleware.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(config: &ServerConfig, host: HostState) -> Result<Router, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let mut leptos_options = conf.leptos_options;
    leptos_options.site_addr = config.listen_addr;
    if let Some(site_root) = &config.site_root {
        leptos_options.site_root = site_root.as_str().into();
    }
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    tracing::debug!(site_root = %site_root_path.display(), "serving static assets");

    Ok(host_routes(host)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(middleware::from_fn(security_headers))
        .layer(TraceLayer::new_for_http()))
}

/// `GET`/`HEAD /health`: no body, 200 while the server is up.
async fn health() -> StatusCode {
    StatusCode::OK
}

async fn security_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    apply_security_headers(response.headers_mut());
    response
}

fn apply_security_headers(headers: &mut HeaderMap) {
    headers.insert(CACHE_CONTROL, HeaderValue::from_static(CACHE_POLICY));
    headers.insert(CONTENT_SECURITY_POLICY, HeaderValue::from_static(CONTENT_POLICY));
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
