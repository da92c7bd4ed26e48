//! Integration tests for registration and authentication flow.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_register_and_login() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "email": "fan@test.com",
                "password": "password123",
                "display_name": "Fan",
                "role": "fan",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(
        response.body.pointer("/data/email").unwrap().as_str(),
        Some("fan@test.com")
    );
    // The password hash never leaves the server
    assert!(response.body.pointer("/data/password_hash").is_none());

    let token = app.login("fan@test.com", "password123").await;
    assert!(!token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let app = TestApp::new().await;
    app.create_test_user("dupe@test.com", "password123", "fan")
        .await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "email": "dupe@test.com",
                "password": "password123",
                "display_name": "Dupe",
                "role": "fan",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_admin_rejected() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "email": "sneaky@test.com",
                "password": "password123",
                "display_name": "Sneaky",
                "role": "admin",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_login_invalid_password() {
    let app = TestApp::new().await;
    app.create_test_user("wrongpw@test.com", "password123", "fan")
        .await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "wrongpw@test.com",
                "password": "not-the-password",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_requires_auth() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/users/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_revokes_session() {
    let app = TestApp::new().await;
    app.create_test_user("logout@test.com", "password123", "fan")
        .await;
    let token = app.login("logout@test.com", "password123").await;

    let response = app
        .request("POST", "/api/auth/logout", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // Token is signed and unexpired, but the session is gone
    let response = app.request("GET", "/api/users/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_update_profile_hourly_rate_fan_forbidden() {
    let app = TestApp::new().await;
    app.create_test_user("ratefan@test.com", "password123", "fan")
        .await;
    let token = app.login("ratefan@test.com", "password123").await;

    let response = app
        .request(
            "PUT",
            "/api/users/me",
            Some(serde_json::json!({ "hourly_rate_cents": 5000 })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_update_profile_creator_sets_rate() {
    let app = TestApp::new().await;
    app.create_test_user("ratecreator@test.com", "password123", "creator")
        .await;
    let token = app.login("ratecreator@test.com", "password123").await;

    let response = app
        .request(
            "PUT",
            "/api/users/me",
            Some(serde_json::json!({
                "hourly_rate_cents": 5000,
                "bio": "Hello subscribers",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(
        response
            .body
            .pointer("/data/hourly_rate_cents")
            .unwrap()
            .as_i64(),
        Some(5000)
    );
}
