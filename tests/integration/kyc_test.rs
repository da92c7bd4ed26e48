//! Integration tests for the KYC flow: upload URL, submission, review.

use http::StatusCode;

use crate::helpers::TestApp;

async fn request_upload_key(app: &TestApp, token: &str) -> String {
    let response = app
        .request(
            "POST",
            "/api/kyc/upload-url",
            Some(serde_json::json!({ "content_type": "image/jpeg" })),
            Some(token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert!(response
        .body
        .pointer("/data/upload_url")
        .unwrap()
        .as_str()
        .unwrap()
        .starts_with("http"));
    assert!(
        response
            .body
            .pointer("/data/max_size_bytes")
            .unwrap()
            .as_u64()
            .unwrap()
            > 0
    );

    response
        .body
        .pointer("/data/key")
        .unwrap()
        .as_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_upload_url_rejects_unknown_content_type() {
    let app = TestApp::new().await;
    app.create_test_user("docuser@test.com", "password123", "creator")
        .await;
    let token = app.login("docuser@test.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/kyc/upload-url",
            Some(serde_json::json!({ "content_type": "application/zip" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_submit_and_review_approval() {
    let app = TestApp::new().await;
    app.create_test_user("applicant@test.com", "password123", "creator")
        .await;
    app.create_test_user("reviewer@test.com", "password123", "admin")
        .await;
    let token = app.login("applicant@test.com", "password123").await;

    let key = request_upload_key(&app, &token).await;

    let response = app
        .request(
            "POST",
            "/api/kyc/submit",
            Some(serde_json::json!({
                "document_type": "passport",
                "document_key": key,
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    let submission_id = response
        .body
        .pointer("/data/id")
        .unwrap()
        .as_str()
        .unwrap()
        .to_string();

    // Account moves to pending
    let response = app.request("GET", "/api/kyc/status", None, Some(&token)).await;
    assert_eq!(
        response.body.pointer("/data/kyc_status").unwrap().as_str(),
        Some("pending")
    );

    // Admin sees it in the queue and approves
    let admin_token = app.login("reviewer@test.com", "password123").await;
    let response = app
        .request("GET", "/api/kyc/pending", None, Some(&admin_token))
        .await;
    assert_eq!(
        response.body.pointer("/data/total").unwrap().as_u64(),
        Some(1)
    );

    let response = app
        .request(
            "POST",
            &format!("/api/kyc/{submission_id}/review"),
            Some(serde_json::json!({ "approve": true })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);

    let response = app.request("GET", "/api/kyc/status", None, Some(&token)).await;
    assert_eq!(
        response.body.pointer("/data/kyc_status").unwrap().as_str(),
        Some("approved")
    );
}

#[tokio::test]
async fn test_submit_foreign_key_rejected() {
    let app = TestApp::new().await;
    app.create_test_user("honest@test.com", "password123", "creator")
        .await;
    let other_id = app
        .create_test_user("other@test.com", "password123", "creator")
        .await;
    let token = app.login("honest@test.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/kyc/submit",
            Some(serde_json::json!({
                "document_type": "passport",
                "document_key": format!("kyc/{other_id}/doc"),
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_second_submission_while_pending_conflicts() {
    let app = TestApp::new().await;
    app.create_test_user("impatient@test.com", "password123", "creator")
        .await;
    let token = app.login("impatient@test.com", "password123").await;

    let key = request_upload_key(&app, &token).await;
    let body = serde_json::json!({
        "document_type": "id_card",
        "document_key": key,
    });

    let response = app
        .request("POST", "/api/kyc/submit", Some(body.clone()), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("POST", "/api/kyc/submit", Some(body), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_review_requires_admin() {
    let app = TestApp::new().await;
    app.create_test_user("plain@test.com", "password123", "fan")
        .await;
    let token = app.login("plain@test.com", "password123").await;

    let response = app.request("GET", "/api/kyc/pending", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_rejection_sets_rejected_status() {
    let app = TestApp::new().await;
    app.create_test_user("denied@test.com", "password123", "creator")
        .await;
    app.create_test_user("strict-admin@test.com", "password123", "admin")
        .await;
    let token = app.login("denied@test.com", "password123").await;

    let key = request_upload_key(&app, &token).await;
    let response = app
        .request(
            "POST",
            "/api/kyc/submit",
            Some(serde_json::json!({
                "document_type": "drivers_license",
                "document_key": key,
            })),
            Some(&token),
        )
        .await;
    let submission_id = response.body.pointer("/data/id").unwrap().as_str().unwrap();

    let admin_token = app.login("strict-admin@test.com", "password123").await;
    let response = app
        .request(
            "POST",
            &format!("/api/kyc/{submission_id}/review"),
            Some(serde_json::json!({
                "approve": false,
                "note": "Document is blurry",
            })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body.pointer("/data/review_note").unwrap().as_str(),
        Some("Document is blurry")
    );

    let response = app.request("GET", "/api/kyc/status", None, Some(&token)).await;
    assert_eq!(
        response.body.pointer("/data/kyc_status").unwrap().as_str(),
        Some("rejected")
    );
}
