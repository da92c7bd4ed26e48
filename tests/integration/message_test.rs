//! Integration tests for subscription-gated messaging.

use http::StatusCode;

use crate::helpers::TestApp;

async fn subscribe(app: &TestApp, token: &str, creator_id: uuid::Uuid) {
    let response = app
        .request(
            "POST",
            "/api/subscriptions",
            Some(serde_json::json!({ "creator_id": creator_id, "tier": "basic" })),
            Some(token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
}

#[tokio::test]
async fn test_unsubscribed_fan_cannot_message() {
    let app = TestApp::new().await;
    let creator_id = app.create_test_creator("gated@test.com", 5000).await;
    app.create_test_user("stranger@test.com", "password123", "fan")
        .await;
    let token = app.login("stranger@test.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/messages",
            Some(serde_json::json!({
                "recipient_id": creator_id,
                "content": "hello",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_subscribed_fan_can_message_and_creator_can_reply() {
    let app = TestApp::new().await;
    let creator_id = app.create_test_creator("replier@test.com", 5000).await;
    let fan_id = app
        .create_test_user("chatty@test.com", "password123", "fan")
        .await;
    let fan_token = app.login("chatty@test.com", "password123").await;

    subscribe(&app, &fan_token, creator_id).await;

    let response = app
        .request(
            "POST",
            "/api/messages",
            Some(serde_json::json!({
                "recipient_id": creator_id,
                "content": "hi there",
            })),
            Some(&fan_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);

    // Creator replies to their own subscriber
    let creator_token = app.login("replier@test.com", "password123").await;
    let response = app
        .request(
            "POST",
            "/api/messages",
            Some(serde_json::json!({
                "recipient_id": fan_id,
                "content": "thanks for subscribing",
            })),
            Some(&creator_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);

    // Both messages appear in the conversation
    let response = app
        .request(
            "GET",
            &format!("/api/messages/conversation/{creator_id}"),
            None,
            Some(&fan_token),
        )
        .await;
    assert_eq!(
        response.body.pointer("/data/total").unwrap().as_u64(),
        Some(2)
    );
}

#[tokio::test]
async fn test_paid_message_charges_hourly_rate() {
    let app = TestApp::new().await;
    let creator_id = app.create_test_creator("priced@test.com", 7500).await;
    app.create_test_user("payer2@test.com", "password123", "fan")
        .await;
    let fan_token = app.login("payer2@test.com", "password123").await;

    subscribe(&app, &fan_token, creator_id).await;

    let response = app
        .request(
            "POST",
            "/api/messages",
            Some(serde_json::json!({
                "recipient_id": creator_id,
                "content": "priority question",
                "paid": true,
            })),
            Some(&fan_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(
        response.body.pointer("/data/is_paid").unwrap().as_bool(),
        Some(true)
    );
    assert_eq!(
        response.body.pointer("/data/cost_cents").unwrap().as_i64(),
        Some(7500)
    );

    // The paid message earning lands next to the subscription earning
    let creator_token = app.login("priced@test.com", "password123").await;
    let response = app
        .request("GET", "/api/payouts/earnings", None, Some(&creator_token))
        .await;
    assert_eq!(
        response.body.pointer("/data/total_cents").unwrap().as_i64(),
        Some(499 + 7500)
    );
}

#[tokio::test]
async fn test_paid_message_to_creator_without_rate_rejected() {
    let app = TestApp::new().await;
    let creator_id = app
        .create_test_user("norate@test.com", "password123", "creator")
        .await;
    app.create_test_user("wouldpay@test.com", "password123", "fan")
        .await;
    let token = app.login("wouldpay@test.com", "password123").await;

    subscribe(&app, &token, creator_id).await;

    let response = app
        .request(
            "POST",
            "/api/messages",
            Some(serde_json::json!({
                "recipient_id": creator_id,
                "content": "take my money",
                "paid": true,
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_inbox_unread_and_mark_read() {
    let app = TestApp::new().await;
    let creator_id = app.create_test_creator("inboxed@test.com", 5000).await;
    app.create_test_user("sender@test.com", "password123", "fan")
        .await;
    let fan_token = app.login("sender@test.com", "password123").await;

    subscribe(&app, &fan_token, creator_id).await;

    app.request(
        "POST",
        "/api/messages",
        Some(serde_json::json!({
            "recipient_id": creator_id,
            "content": "first",
        })),
        Some(&fan_token),
    )
    .await;

    let creator_token = app.login("inboxed@test.com", "password123").await;

    let response = app
        .request("GET", "/api/messages/unread-count", None, Some(&creator_token))
        .await;
    assert_eq!(
        response.body.pointer("/data/unread").unwrap().as_u64(),
        Some(1)
    );

    let response = app
        .request("GET", "/api/messages/inbox", None, Some(&creator_token))
        .await;
    let message_id = response
        .body
        .pointer("/data/items/0/id")
        .unwrap()
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .request(
            "PUT",
            &format!("/api/messages/{message_id}/read"),
            None,
            Some(&creator_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", "/api/messages/unread-count", None, Some(&creator_token))
        .await;
    assert_eq!(
        response.body.pointer("/data/unread").unwrap().as_u64(),
        Some(0)
    );
}

#[tokio::test]
async fn test_mark_read_only_by_recipient() {
    let app = TestApp::new().await;
    let creator_id = app.create_test_creator("strict@test.com", 5000).await;
    app.create_test_user("reader@test.com", "password123", "fan")
        .await;
    let fan_token = app.login("reader@test.com", "password123").await;

    subscribe(&app, &fan_token, creator_id).await;

    let response = app
        .request(
            "POST",
            "/api/messages",
            Some(serde_json::json!({
                "recipient_id": creator_id,
                "content": "only you can read this",
            })),
            Some(&fan_token),
        )
        .await;
    let message_id = response.body.pointer("/data/id").unwrap().as_str().unwrap();

    // The sender is not the recipient; marking read fails
    let response = app
        .request(
            "PUT",
            &format!("/api/messages/{message_id}/read"),
            None,
            Some(&fan_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
