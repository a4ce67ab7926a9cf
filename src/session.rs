//! One-time launch token, cookie auth and the shutdown trigger.
//!
//! ARCHITECTURE
//! ============
//! The process generates a random token at startup and opens the browser on
//! `/auth/{token}`. A matching token is exchanged for an HttpOnly,
//! SameSite=Strict cookie; every `/api` route requires that cookie. Anything
//! else on the machine that only knows the port cannot call the API.

use std::fmt::Write;
use std::sync::Arc;

use axum::extract::{Path, Request, State};
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use rand::Rng;
use time::Duration;
use tokio::sync::Notify;

pub const TOKEN_COOKIE: &str = "token";

/// Where a rejected auth link lands.
pub const AUTH_ERROR_PATH: &str = "/error";

fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Shared by the auth routes, the API guard and `main`.
#[derive(Clone, Debug)]
pub struct HostState {
    token: Arc<str>,
    shutdown: Arc<Notify>,
}

impl HostState {
    #[must_use]
    pub fn new(token: impl Into<Arc<str>>) -> Self {
        Self { token: token.into(), shutdown: Arc::new(Notify::new()) }
    }

    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    fn accepts(&self, candidate: &str) -> bool {
        !candidate.is_empty() && candidate == &*self.token
    }

    /// Ask the server to stop. Remembered if nobody is waiting yet.
    pub fn request_shutdown(&self) {
        self.shutdown.notify_one();
    }

    /// Resolves once [`HostState::request_shutdown`] has been called.
    pub async fn shutdown_requested(&self) {
        self.shutdown.notified().await;
    }
}

fn found(location: &'static str) -> impl IntoResponse {
    (StatusCode::FOUND, [(LOCATION, location)])
}

/// `GET /auth/{token}`: trade the launch token for the session cookie.
pub async fn authenticate(State(host): State<HostState>, Path(token): Path<String>, jar: CookieJar) -> Response {
    if !host.accepts(&token) {
        tracing::warn!("rejected auth link");
        let cleared = Cookie::build((TOKEN_COOKIE, "")).path("/").max_age(Duration::ZERO);
        return (jar.add(cleared), found(AUTH_ERROR_PATH)).into_response();
    }

    let cookie = Cookie::build((TOKEN_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .max_age(Duration::days(1));
    (jar.add(cookie), found("/")).into_response()
}

/// Middleware for `/api`: 401 unless the token cookie matches.
pub async fn require_token(State(host): State<HostState>, jar: CookieJar, request: Request, next: Next) -> Response {
    match jar.get(TOKEN_COOKIE) {
        Some(cookie) if host.accepts(cookie.value()) => next.run(request).await,
        _ => StatusCode::UNAUTHORIZED.into_response(),
    }
}

/// `POST /api/shutdown`: acknowledge, then stop gracefully.
pub async fn shutdown(State(host): State<HostState>) -> StatusCode {
    tracing::info!("shutdown requested over api");
    host.request_shutdown();
    StatusCode::OK
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
