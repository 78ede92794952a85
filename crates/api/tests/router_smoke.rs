//! Router-level tests that run without a database.
//!
//! The pool is created lazily and never used: these tests only exercise
//! routes and extractors that answer before any query is issued (navigation,
//! auth rejections, unknown paths).

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::postgres::PgPoolOptions;
use tower::util::ServiceExt;

use renteria_api::auth::jwt::{generate_access_token, JwtConfig};
use renteria_api::config::ServerConfig;
use renteria_api::router::build_app_router;
use renteria_api::state::AppState;

fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".into(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".into()],
        request_timeout_secs: 5,
        jwt: JwtConfig {
            secret: "router-smoke-test-secret".into(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Build the app with a lazy pool that never connects.
fn test_app() -> (Router, ServerConfig) {
    let config = test_config();
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://localhost:1/renteria_unused")
        .expect("lazy pool creation should not touch the network");
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    (build_app_router(state, &config), config)
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

#[tokio::test]
async fn anonymous_nav_lists_public_sections() {
    let (app, _) = test_app();

    let response = app
        .oneshot(Request::get("/nav").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let labels: Vec<&str> = json
        .as_array()
        .expect("nav is an array")
        .iter()
        .map(|l| l["label"].as_str().unwrap())
        .collect();
    assert_eq!(
        labels,
        vec!["Stores", "Categories", "Models", "Login", "Register", "Work with us"]
    );
}

#[tokio::test]
async fn admin_nav_lists_back_office_sections() {
    let (app, config) = test_app();
    let token = generate_access_token(1, "admin", &config.jwt).unwrap();

    let response = app
        .oneshot(
            Request::get("/nav")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let labels: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["label"].as_str().unwrap())
        .collect();
    assert_eq!(
        labels,
        vec!["Users", "Stores", "Categories", "Makes", "Models", "Tags", "Vehicles"]
    );
}

#[tokio::test]
async fn nav_with_garbage_token_degrades_to_anonymous() {
    let (app, _) = test_app();

    let response = app
        .oneshot(
            Request::get("/nav")
                .header(header::AUTHORIZATION, "Bearer not-a-jwt")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn user_admin_routes_reject_anonymous() {
    let (app, _) = test_app();

    let response = app
        .oneshot(Request::get("/user/all").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn mutations_reject_clients() {
    let (app, config) = test_app();
    let token = generate_access_token(3, "client", &config.jwt).unwrap();

    let response = app
        .oneshot(
            Request::post("/category/")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"name":"SUV","fare":150.0}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let json = body_json(response).await;
    assert_eq!(json["code"], "FORBIDDEN");
}

#[tokio::test]
async fn token_with_unknown_role_is_rejected() {
    let (app, config) = test_app();
    // A token can carry any role string; the extractor must fail closed.
    let token = generate_access_token(9, "superuser", &config.jwt).unwrap();

    let response = app
        .oneshot(
            Request::get("/vehicle/all")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn unknown_route_is_404() {
    let (app, _) = test_app();

    let response = app
        .oneshot(Request::get("/rental/all").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn logout_requires_auth() {
    let (app, _) = test_app();

    let response = app
        .oneshot(Request::get("/user/logout").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
