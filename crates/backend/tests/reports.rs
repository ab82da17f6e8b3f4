mod common;

use axum::http::{header, StatusCode};
use common::*;

#[tokio::test]
async fn test_catalog_and_category_filter() {
    let app = app();
    let token = login(&app, ADMIN).await;

    let all = json_body(send(&app, get("/api/reports", &token)).await).await;
    assert_eq!(all.as_array().unwrap().len(), 5);

    let finance = json_body(send(&app, get("/api/reports?filter=Finance", &token)).await).await;
    let ids: Vec<&str> = finance
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["financial-summary"]);
}

#[tokio::test]
async fn test_export_is_a_csv_attachment() {
    let app = app();
    let token = login(&app, COACH).await;
    let response = send(&app, get("/api/reports/player-roster/export", &token)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/csv; charset=utf-8"
    );
    let disposition = response.headers()[header::CONTENT_DISPOSITION]
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\"Player_Roster_"));
    let today = chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string();
    assert!(disposition.ends_with(&format!("_{}.csv\"", today)));

    let body = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(!body.ends_with('\n'));
    let mut lines = body.lines();
    assert_eq!(
        lines.next(),
        Some("Name,Age,Category,Position,Guardian,Phone,Join Date,Status")
    );
    assert_eq!(lines.count(), 3);
}

#[tokio::test]
async fn test_unknown_report_is_404() {
    let app = app();
    let token = login(&app, ADMIN).await;
    let response = send(&app, get("/api/reports/season-forecast/export", &token)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["code"], "unknown_report");
}
