#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use creative_hub_api::auth::jwt::{Claims, JwtConfig};
use creative_hub_api::config::{ServerConfig, StoreBackend};
use creative_hub_api::router::build_app_router;
use creative_hub_api::state::AppState;

pub const ADMIN: &str = "admin@agency.test";
pub const MEMBER: &str = "member@agency.test";

const TEST_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// in-memory storage and [`ADMIN`] as the only seeded admin.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        store_backend: StoreBackend::Memory,
        database_url: None,
        admin_emails: vec![ADMIN.to_string()],
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
            leeway_secs: 0,
        },
    }
}

/// Build the full application router on fresh in-memory storage.
///
/// Clones of the returned router share the same storage, so a test can
/// create content with one request and observe it with the next.
pub async fn build_test_app() -> Router {
    let config = test_config();
    let state = AppState::in_memory(config.clone());
    state.seed_admins().await.unwrap();
    build_app_router(state, &config)
}

/// Mint a bearer token for `email` the way the identity provider does.
pub fn token_for(email: &str) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: email.to_string(),
        exp: now + 900,
        iat: Some(now),
    };
    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap()
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    as_user: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(email) = as_user {
        builder = builder.header("authorization", format!("Bearer {}", token_for(email)));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

/// GET as `as_user` (an email), or anonymously when `None`.
pub async fn get(app: &Router, uri: &str, as_user: Option<&str>) -> Response<Body> {
    send(app, "GET", uri, as_user, None).await
}

pub async fn post_json(
    app: &Router,
    uri: &str,
    as_user: Option<&str>,
    json: serde_json::Value,
) -> Response<Body> {
    send(app, "POST", uri, as_user, Some(json)).await
}

pub async fn put_json(
    app: &Router,
    uri: &str,
    as_user: Option<&str>,
    json: serde_json::Value,
) -> Response<Body> {
    send(app, "PUT", uri, as_user, Some(json)).await
}

pub async fn patch_json(
    app: &Router,
    uri: &str,
    as_user: Option<&str>,
    json: serde_json::Value,
) -> Response<Body> {
    send(app, "PATCH", uri, as_user, Some(json)).await
}

pub async fn delete(app: &Router, uri: &str, as_user: Option<&str>) -> Response<Body> {
    send(app, "DELETE", uri, as_user, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn shop_app() -> serde_json::Value {
    serde_json::json!({
        "title": "Shop App",
        "category": "E-commerce",
        "shortDescription": "Online storefront",
        "description": "A full storefront with checkout and inventory.",
        "liveUrl": "https://shop.example.com",
        "clientLocation": "Germany",
        "completionDate": "2024-05-01",
        "technologies": ["React", "Node.js"]
    })
}
