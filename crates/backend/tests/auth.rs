mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::*;
use serde_json::json;

#[tokio::test]
async fn test_health_is_public() {
    let app = app();
    let response = send(&app, Request::get("/health").body(Body::empty()).unwrap()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"ok");
}

#[tokio::test]
async fn test_login_returns_token_and_user() {
    let app = app();
    let response = send(
        &app,
        post_json(
            "/api/system/auth/login",
            None,
            json!({ "email": ADMIN, "password": PASSWORD }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert!(!body["access_token"].as_str().unwrap().is_empty());
    assert_eq!(body["user"]["role"], "admin");
    assert_eq!(body["user"]["name"], "John Mwangi");
    assert_eq!(body["user"]["academyName"], "Nairobi FC Academy");
}

#[tokio::test]
async fn test_wrong_password_and_unknown_email_get_same_error() {
    let app = app();
    for (email, password) in [(ADMIN, "wrongpass"), ("ghost@nairobi-fc.com", PASSWORD)] {
        let response = send(
            &app,
            post_json(
                "/api/system/auth/login",
                None,
                json!({ "email": email, "password": password }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = json_body(response).await;
        assert_eq!(body["error"], "Invalid email or password");
        assert_eq!(body["code"], "invalid_credentials");
    }
}

#[tokio::test]
async fn test_me_and_logout() {
    let app = app();
    let token = login(&app, MEDICAL).await;

    let response = send(&app, get("/api/system/auth/me", &token)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let user = json_body(response).await;
    assert_eq!(user["name"], "Dr. Peter Kamau");
    assert_eq!(user["role"], "medical");

    let response = send(&app, post_json("/api/system/auth/logout", Some(&token), json!({}))).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_missing_or_bad_token_is_401() {
    let app = app();
    let response = send(&app, Request::get("/api/fees").body(Body::empty()).unwrap()).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json_body(response).await["code"], "unauthorized");

    let response = send(&app, get("/api/fees", "not-a-token")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_role_gates_follow_sidebar() {
    let app = app();
    let parent = login(&app, PARENT).await;
    let coach = login(&app, COACH).await;

    assert_eq!(send(&app, get("/api/fees", &parent)).await.status(), StatusCode::OK);
    assert_eq!(send(&app, get("/api/players", &parent)).await.status(), StatusCode::FORBIDDEN);
    assert_eq!(send(&app, get("/api/fees", &coach)).await.status(), StatusCode::FORBIDDEN);
    assert_eq!(send(&app, get("/api/medical", &coach)).await.status(), StatusCode::FORBIDDEN);
    assert_eq!(send(&app, get("/api/training", &coach)).await.status(), StatusCode::OK);

    let response = send(&app, get("/api/reports", &parent)).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        json_body(response).await["error"],
        "role 'parent' cannot open this page"
    );
}

#[tokio::test]
async fn test_navigation_lists_allowed_views() {
    let app = app();
    let parent = login(&app, PARENT).await;
    let items = json_body(send(&app, get("/api/system/navigation", &parent)).await).await;
    let paths: Vec<&str> = items
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["path"].as_str().unwrap())
        .collect();
    assert_eq!(paths, vec!["/", "/fees"]);

    let admin = login(&app, ADMIN).await;
    let items = json_body(send(&app, get("/api/system/navigation", &admin)).await).await;
    assert_eq!(items.as_array().unwrap().len(), 13);
}

#[tokio::test]
async fn test_dashboard_follows_role() {
    let app = app();
    let token = login(&app, MEDICAL).await;
    let response = send(&app, get("/api/dashboard", &token)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let dashboard = json_body(response).await;
    assert_eq!(dashboard["greeting"], "Welcome back, Dr. Peter Kamau");
    assert_eq!(dashboard["stats"][0]["title"], "Active Injuries");
}
