//! Integration tests for Stripe Connect onboarding and earnings.

use std::collections::HashMap;

use axum::routing::post;
use axum::{Form, Json, Router};
use http::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::helpers::TestApp;

/// Stand-in for the Stripe token endpoint the test config points at
/// (`stripe.connect_base_url = "http://localhost:12111"`). Accepts one
/// known code and rejects everything else the way Stripe does.
async fn spawn_stripe_stub() {
    async fn token_exchange(
        Form(form): Form<HashMap<String, String>>,
    ) -> (StatusCode, Json<Value>) {
        match form.get("code").map(String::as_str) {
            Some("ac_valid") => (
                StatusCode::OK,
                Json(json!({
                    "stripe_user_id": "acct_test_1",
                    "access_token": "sk_test_access",
                    "livemode": false,
                })),
            ),
            _ => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "invalid_grant",
                    "error_description": "Authorization code does not exist",
                })),
            ),
        }
    }

    let router = Router::new().route("/oauth/token", post(token_exchange));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:12111")
        .await
        .expect("Failed to bind Stripe stub port");
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Stripe stub server failed");
    });
}

#[tokio::test]
async fn test_callback_exchange_and_rejection() {
    let app = TestApp::new().await;
    spawn_stripe_stub().await;

    let creator_id = app.create_test_creator("connected@test.com", 5000).await;
    app.approve_kyc(creator_id).await;
    let token = app.login("connected@test.com", "password123").await;

    // Successful exchange stores the connected account id
    let response = app
        .request(
            "GET",
            &format!("/api/payouts/callback?code=ac_valid&state={creator_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(
        response
            .body
            .pointer("/data/payouts_connected")
            .unwrap()
            .as_bool(),
        Some(true)
    );

    let response = app.request("GET", "/api/users/me", None, Some(&token)).await;
    assert_eq!(
        response
            .body
            .pointer("/data/payouts_connected")
            .unwrap()
            .as_bool(),
        Some(true)
    );

    // A code Stripe rejects surfaces as an external-service failure
    let other_id = app.create_test_creator("rejected@test.com", 5000).await;
    app.approve_kyc(other_id).await;
    let other_token = app.login("rejected@test.com", "password123").await;

    let response = app
        .request(
            "GET",
            &format!("/api/payouts/callback?code=ac_expired&state={other_id}"),
            None,
            Some(&other_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_GATEWAY, "{:?}", response.body);
}

#[tokio::test]
async fn test_callback_state_mismatch_forbidden() {
    let app = TestApp::new().await;
    let creator_id = app.create_test_creator("honest-cb@test.com", 5000).await;
    app.approve_kyc(creator_id).await;
    let token = app.login("honest-cb@test.com", "password123").await;

    let foreign_state = Uuid::new_v4();
    let response = app
        .request(
            "GET",
            &format!("/api/payouts/callback?code=ac_valid&state={foreign_state}"),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_callback_malformed_state_rejected() {
    let app = TestApp::new().await;
    let creator_id = app.create_test_creator("garbled@test.com", 5000).await;
    app.approve_kyc(creator_id).await;
    let token = app.login("garbled@test.com", "password123").await;

    let response = app
        .request(
            "GET",
            "/api/payouts/callback?code=ac_valid&state=not-a-uuid",
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_earnings_empty_total_is_zero() {
    let app = TestApp::new().await;
    app.create_test_creator("broke@test.com", 5000).await;
    let token = app.login("broke@test.com", "password123").await;

    let response = app
        .request("GET", "/api/payouts/earnings", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(
        response.body.pointer("/data/total_cents").unwrap().as_i64(),
        Some(0)
    );
    assert_eq!(
        response
            .body
            .pointer("/data/earnings/total")
            .unwrap()
            .as_u64(),
        Some(0)
    );
}
