mod common;

use auth::JwtHandler;
use axum::body::Body;
use axum::http::Request;
use axum::http::StatusCode;
use axum::Router;
use common::TestApp;
use common::APP_ID;
use common::APP_SECRET;
use serde_json::json;
use serde_json::Value;
use tower::ServiceExt;

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.expect("Request failed");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn register(app: &TestApp, email: &str, password: &str) -> (StatusCode, Value) {
    send(
        app.router(),
        post_json(
            "/api/auth/register",
            json!({ "email": email, "password": password }),
        ),
    )
    .await
}

#[tokio::test]
async fn test_register_and_login() {
    let app = TestApp::new();

    let (status, body) = register(&app, "alice@example.com", "Secr3t!").await;
    assert_eq!(status, StatusCode::CREATED);
    let user_id = body["data"]["user_id"].as_i64().unwrap();
    assert!(user_id > 0);

    let (status, body) = send(
        app.router(),
        post_json(
            "/api/auth/login",
            json!({ "email": "alice@example.com", "password": "Secr3t!", "app_id": APP_ID }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let token = body["data"]["token"].as_str().unwrap();
    let claims = JwtHandler::new(APP_SECRET.as_bytes())
        .unwrap()
        .decode(token)
        .unwrap();
    assert_eq!(claims.user_id, user_id);
    assert_eq!(claims.email, "alice@example.com");
}

#[tokio::test]
async fn test_login_failures_share_one_response() {
    let app = TestApp::new();
    register(&app, "alice@example.com", "Secr3t!").await;

    let (wrong_status, wrong_body) = send(
        app.router(),
        post_json(
            "/api/auth/login",
            json!({ "email": "alice@example.com", "password": "wrong", "app_id": APP_ID }),
        ),
    )
    .await;
    let (unknown_status, unknown_body) = send(
        app.router(),
        post_json(
            "/api/auth/login",
            json!({ "email": "bob@example.com", "password": "Secr3t!", "app_id": APP_ID }),
        ),
    )
    .await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_status, unknown_status);
    assert_eq!(wrong_body, unknown_body);
}

#[tokio::test]
async fn test_login_unknown_application() {
    let app = TestApp::new();
    register(&app, "alice@example.com", "Secr3t!").await;

    let (status, body) = send(
        app.router(),
        post_json(
            "/api/auth/login",
            json!({ "email": "alice@example.com", "password": "Secr3t!", "app_id": 999 }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["data"]["message"], "Invalid app id");
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::new();

    let (status, _) = register(&app, "alice@example.com", "Secr3t!").await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = register(&app, "alice@example.com", "Secr3t!").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("already exists"));
}

#[tokio::test]
async fn test_register_invalid_email() {
    let app = TestApp::new();

    let (status, _) = register(&app, "not-an-email", "Secr3t!").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(app.store.user_count(), 0);
}

#[tokio::test]
async fn test_is_admin() {
    let app = TestApp::new();

    let (_, body) = register(&app, "alice@example.com", "Secr3t!").await;
    let user_id = body["data"]["user_id"].as_i64().unwrap();

    let (status, body) = send(app.router(), get(&format!("/api/users/{}/is-admin", user_id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["is_admin"], false);
}

#[tokio::test]
async fn test_is_admin_unknown_user() {
    let app = TestApp::new();

    let (status, body) = send(app.router(), get("/api/users/12345/is-admin")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["data"]["message"], "User not found");
}
