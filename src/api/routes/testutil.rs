//! Shared fixtures for route tests.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::util::ServiceExt;

use crate::api::build_router;
use crate::api::state::AppState;
use crate::storage::DocumentStore;

pub(crate) const TEST_ADMIN_KEY: &str = "sesame";

pub(crate) struct TestApp {
    pub state: AppState,
    _tmp: tempfile::TempDir,
}

/// A fresh app over an empty store in a temp directory. Routers built
/// from it share the same store and session map.
pub(crate) fn test_app() -> TestApp {
    let tmp = tempfile::tempdir().unwrap();
    let store = DocumentStore::new(tmp.path().join("data.json"));
    let state = AppState::new(store, TEST_ADMIN_KEY.to_string(), tmp.path().join("public"));
    TestApp { state, _tmp: tmp }
}

impl TestApp {
    pub fn router(&self) -> Router {
        build_router(self.state.clone())
    }
}

pub(crate) async fn get_json(app: Router, uri: &str, cookie: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let resp = app
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

/// POST a urlencoded form. Returns the status, the `Location` header,
/// and the `sid` cookie pair set by the response, if any.
pub(crate) async fn post_form(
    app: Router,
    uri: &str,
    body: &str,
    cookie: Option<&str>,
) -> (StatusCode, Option<String>, Option<String>) {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let resp = app
        .oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let location = resp
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_string());
    let set_cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|v| v.to_string());
    (status, location, set_cookie)
}

/// Register a player and hand back their session cookie.
pub(crate) async fn register_player(app: &TestApp, name: &str) -> String {
    let (status, _, cookie) = post_form(
        app.router(),
        "/register",
        &format!("name={}", name),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    cookie.expect("registration should set a session cookie")
}

/// Log in as admin and hand back the session cookie.
pub(crate) async fn admin_cookie(app: &TestApp) -> String {
    let (status, location, cookie) = post_form(
        app.router(),
        "/admin-login",
        &format!("key={}", TEST_ADMIN_KEY),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/admin"));
    cookie.expect("login should set a session cookie")
}
