//! Integration tests for creator browsing and profile views.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_list_creators_excludes_fans() {
    let app = TestApp::new().await;
    app.create_test_creator("creator1@test.com", 5000).await;
    app.create_test_creator("creator2@test.com", 2500).await;
    app.create_test_user("onlyfan@test.com", "password123", "fan")
        .await;
    let token = app.login("onlyfan@test.com", "password123").await;

    let response = app.request("GET", "/api/creators", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body.pointer("/data/total").unwrap().as_u64(),
        Some(2)
    );
    // Public listing omits emails
    let first = response.body.pointer("/data/items/0").unwrap();
    assert!(first.get("email").is_none());
}

#[tokio::test]
async fn test_get_creator_records_view() {
    let app = TestApp::new().await;
    let creator_id = app.create_test_creator("viewed@test.com", 5000).await;
    app.create_test_user("viewer@test.com", "password123", "fan")
        .await;
    let fan_token = app.login("viewer@test.com", "password123").await;

    // Two views from the same fan collapse into one row with count 2
    for _ in 0..2 {
        let response = app
            .request(
                "GET",
                &format!("/api/creators/{creator_id}"),
                None,
                Some(&fan_token),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
    }

    let creator_token = app.login("viewed@test.com", "password123").await;
    let response = app
        .request("GET", "/api/creators/me/views", None, Some(&creator_token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body.pointer("/data/total").unwrap().as_u64(),
        Some(1)
    );
    assert_eq!(
        response
            .body
            .pointer("/data/items/0/view_count")
            .unwrap()
            .as_i64(),
        Some(2)
    );
}

#[tokio::test]
async fn test_get_creator_self_view_not_recorded() {
    let app = TestApp::new().await;
    let creator_id = app.create_test_creator("selfview@test.com", 5000).await;
    let token = app.login("selfview@test.com", "password123").await;

    let response = app
        .request(
            "GET",
            &format!("/api/creators/{creator_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", "/api/creators/me/views", None, Some(&token))
        .await;
    assert_eq!(
        response.body.pointer("/data/total").unwrap().as_u64(),
        Some(0)
    );
}

#[tokio::test]
async fn test_get_fan_profile_not_found() {
    let app = TestApp::new().await;
    let fan_id = app
        .create_test_user("hidden@test.com", "password123", "fan")
        .await;
    app.create_test_user("browser@test.com", "password123", "fan")
        .await;
    let token = app.login("browser@test.com", "password123").await;

    let response = app
        .request("GET", &format!("/api/creators/{fan_id}"), None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_profile_views_fan_forbidden() {
    let app = TestApp::new().await;
    app.create_test_user("nofan@test.com", "password123", "fan")
        .await;
    let token = app.login("nofan@test.com", "password123").await;

    let response = app
        .request("GET", "/api/creators/me/views", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}
