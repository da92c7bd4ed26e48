//! Integration tests for the subscription lifecycle.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_subscribe_and_list() {
    let app = TestApp::new().await;
    let creator_id = app.create_test_creator("star@test.com", 5000).await;
    app.create_test_user("sub@test.com", "password123", "fan")
        .await;
    let token = app.login("sub@test.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/subscriptions",
            Some(serde_json::json!({
                "creator_id": creator_id,
                "tier": "premium",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(
        response.body.pointer("/data/status").unwrap().as_str(),
        Some("active")
    );
    // premium = 2x base price
    assert_eq!(
        response.body.pointer("/data/price_cents").unwrap().as_i64(),
        Some(998)
    );

    let response = app
        .request("GET", "/api/subscriptions", None, Some(&token))
        .await;
    assert_eq!(
        response.body.pointer("/data/total").unwrap().as_u64(),
        Some(1)
    );
}

#[tokio::test]
async fn test_subscribe_twice_conflicts() {
    let app = TestApp::new().await;
    let creator_id = app.create_test_creator("twice@test.com", 5000).await;
    app.create_test_user("eager@test.com", "password123", "fan")
        .await;
    let token = app.login("eager@test.com", "password123").await;

    let body = serde_json::json!({ "creator_id": creator_id, "tier": "basic" });
    let response = app
        .request("POST", "/api/subscriptions", Some(body.clone()), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("POST", "/api/subscriptions", Some(body), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_cancel_then_resubscribe_reactivates() {
    let app = TestApp::new().await;
    let creator_id = app.create_test_creator("cycle@test.com", 5000).await;
    app.create_test_user("cycler@test.com", "password123", "fan")
        .await;
    let token = app.login("cycler@test.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/subscriptions",
            Some(serde_json::json!({ "creator_id": creator_id, "tier": "basic" })),
            Some(&token),
        )
        .await;
    let sub_id = response
        .body
        .pointer("/data/id")
        .unwrap()
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .request(
            "DELETE",
            &format!("/api/subscriptions/{sub_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body.pointer("/data/status").unwrap().as_str(),
        Some("canceled")
    );

    // Resubscribing reuses the same row, upgraded to vip
    let response = app
        .request(
            "POST",
            "/api/subscriptions",
            Some(serde_json::json!({ "creator_id": creator_id, "tier": "vip" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body.pointer("/data/id").unwrap().as_str(),
        Some(sub_id.as_str())
    );
    assert_eq!(
        response.body.pointer("/data/tier").unwrap().as_str(),
        Some("vip")
    );
}

#[tokio::test]
async fn test_cancel_other_users_subscription_forbidden() {
    let app = TestApp::new().await;
    let creator_id = app.create_test_creator("victim@test.com", 5000).await;
    app.create_test_user("owner@test.com", "password123", "fan")
        .await;
    app.create_test_user("meddler@test.com", "password123", "fan")
        .await;
    let owner_token = app.login("owner@test.com", "password123").await;
    let meddler_token = app.login("meddler@test.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/subscriptions",
            Some(serde_json::json!({ "creator_id": creator_id, "tier": "basic" })),
            Some(&owner_token),
        )
        .await;
    let sub_id = response.body.pointer("/data/id").unwrap().as_str().unwrap();

    let response = app
        .request(
            "DELETE",
            &format!("/api/subscriptions/{sub_id}"),
            None,
            Some(&meddler_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_subscribe_to_self_rejected() {
    let app = TestApp::new().await;
    let creator_id = app.create_test_creator("narcissist@test.com", 5000).await;
    let token = app.login("narcissist@test.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/subscriptions",
            Some(serde_json::json!({ "creator_id": creator_id, "tier": "basic" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_subscription_records_earning() {
    let app = TestApp::new().await;
    let creator_id = app.create_test_creator("earner@test.com", 5000).await;
    app.approve_kyc(creator_id).await;
    app.create_test_user("payer@test.com", "password123", "fan")
        .await;
    let fan_token = app.login("payer@test.com", "password123").await;

    app.request(
        "POST",
        "/api/subscriptions",
        Some(serde_json::json!({ "creator_id": creator_id, "tier": "vip" })),
        Some(&fan_token),
    )
    .await;

    let creator_token = app.login("earner@test.com", "password123").await;
    let response = app
        .request("GET", "/api/payouts/earnings", None, Some(&creator_token))
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(
        response.body.pointer("/data/total_cents").unwrap().as_i64(),
        Some(2495)
    );
    assert_eq!(
        response
            .body
            .pointer("/data/earnings/items/0/kind")
            .unwrap()
            .as_str(),
        Some("subscription")
    );
}
