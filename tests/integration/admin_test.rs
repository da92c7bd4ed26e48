//! Integration tests for admin operations and payout gating.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_wipe_requires_admin() {
    let app = TestApp::new().await;
    app.create_test_user("civilian@test.com", "password123", "fan")
        .await;
    let token = app.login("civilian@test.com", "password123").await;

    let response = app.request("POST", "/api/admin/wipe", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_wipe_empties_tables() {
    let app = TestApp::new().await;
    app.create_test_creator("doomed@test.com", 5000).await;
    app.create_test_user("wiper@test.com", "password123", "admin")
        .await;
    let token = app.login("wiper@test.com", "password123").await;

    let response = app.request("POST", "/api/admin/wipe", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_payout_connect_requires_approved_kyc() {
    let app = TestApp::new().await;
    let creator_id = app.create_test_creator("unverified@test.com", 5000).await;
    let token = app.login("unverified@test.com", "password123").await;

    let response = app
        .request("GET", "/api/payouts/connect", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    app.approve_kyc(creator_id).await;

    let response = app
        .request("GET", "/api/payouts/connect", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);

    let url = response.body.pointer("/data/url").unwrap().as_str().unwrap();
    assert!(url.contains("/oauth/authorize"));
    assert!(url.contains(&format!("state={creator_id}")));
}

#[tokio::test]
async fn test_payout_connect_fan_forbidden() {
    let app = TestApp::new().await;
    app.create_test_user("fanpay@test.com", "password123", "fan")
        .await;
    let token = app.login("fanpay@test.com", "password123").await;

    let response = app
        .request("GET", "/api/payouts/connect", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}
