use super::*;
use axum::body::Body;
use axum::http::header::{COOKIE, LOCATION, SET_COOKIE};
use axum::http::{Method, Request};
use tower::ServiceExt;

#[tokio::test]
async fn health_reports_ok() {
    assert_eq!(health().await, StatusCode::OK);
}

#[test]
fn security_headers_are_set() {
    let mut headers = HeaderMap::new();
    apply_security_headers(&mut headers);
    assert_eq!(headers.get(CACHE_CONTROL).unwrap(), CACHE_POLICY);
    assert_eq!(headers.get(CONTENT_SECURITY_POLICY).unwrap(), CONTENT_POLICY);
}

#[test]
fn security_headers_replace_existing_values() {
    let mut headers = HeaderMap::new();
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("public, max-age=3600"));
    apply_security_headers(&mut headers);
    assert_eq!(headers.get_all(CACHE_CONTROL).iter().count(), 1);
    assert_eq!(headers.get(CACHE_CONTROL).unwrap(), CACHE_POLICY);
}

#[test]
fn content_policy_lists_every_directive() {
    let directives: Vec<&str> = CONTENT_POLICY.split("; ").collect();
    assert_eq!(
        directives,
        vec![
            "default-src 'self'",
            "connect-src 'self'",
            "style-src 'self' 'unsafe-inline'",
            "font-src data:",
            "img-src 'self' https://static.staticwars.com/quaggans/",
            "script-src 'self' 'unsafe-inline'",
        ]
    );
}

// =============================================================================
// host routes
// =============================================================================

const TOKEN: &str = "0123abcd";

fn request(method: Method, uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

fn set_cookie(response: &Response) -> String {
    response.headers().get(SET_COOKIE).unwrap().to_str().unwrap().to_owned()
}

#[tokio::test]
async fn health_answers_head() {
    let app = host_routes(HostState::new(TOKEN));
    let response = app.oneshot(request(Method::HEAD, "/health", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn valid_auth_link_sets_strict_http_only_cookie() {
    let app = host_routes(HostState::new(TOKEN));
    let response = app.oneshot(request(Method::GET, "/auth/0123abcd", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers().get(LOCATION).unwrap(), "/");
    let cookie = set_cookie(&response);
    assert!(cookie.starts_with("token=0123abcd"), "{cookie}");
    assert!(cookie.contains("HttpOnly"), "{cookie}");
    assert!(cookie.contains("SameSite=Strict"), "{cookie}");
    assert!(cookie.contains("Path=/"), "{cookie}");
    assert!(cookie.contains("Max-Age=86400"), "{cookie}");
}

#[tokio::test]
async fn wrong_auth_link_clears_cookie_and_redirects_to_error() {
    let app = host_routes(HostState::new(TOKEN));
    let response = app.oneshot(request(Method::GET, "/auth/guess", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers().get(LOCATION).unwrap(), session::AUTH_ERROR_PATH);
    let cookie = set_cookie(&response);
    assert!(cookie.starts_with("token="), "{cookie}");
    assert!(cookie.contains("Max-Age=0"), "{cookie}");
}

#[tokio::test]
async fn api_rejects_missing_or_wrong_cookie() {
    let host = HostState::new(TOKEN);

    let response = host_routes(host.clone()).oneshot(request(Method::POST, "/api/shutdown", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = host_routes(host.clone())
        .oneshot(request(Method::POST, "/api/shutdown", Some("token=nope")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let pending = tokio::time::timeout(std::time::Duration::from_millis(50), host.shutdown_requested()).await;
    assert!(pending.is_err(), "rejected calls must not stop the server");
}

#[tokio::test]
async fn api_shutdown_with_cookie_triggers_shutdown() {
    let host = HostState::new(TOKEN);
    let response = host_routes(host.clone())
        .oneshot(request(Method::POST, "/api/shutdown", Some("token=0123abcd")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    tokio::time::timeout(std::time::Duration::from_secs(1), host.shutdown_requested())
        .await
        .expect("shutdown should be pending");
}
