//! Shared test helpers for integration tests.

use axum::body::Body;
use axum::Router;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use fanlink_core::config::AppConfig;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application backed by the `test` config overlay.
    pub async fn new() -> Self {
        let config = AppConfig::load("test").expect("Failed to load test config");

        let db_pool = fanlink_database::connection::create_pool(&config.database)
            .await
            .expect("Failed to connect to test database");

        fanlink_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        Self::clean_database(&db_pool).await;

        let state = fanlink_api::build_state(config.clone(), db_pool.clone())
            .await
            .expect("Failed to build app state");
        let router = fanlink_api::build_app(state);

        Self {
            router,
            db_pool,
            config,
        }
    }

    /// Clean all test data from the database
    async fn clean_database(pool: &PgPool) {
        sqlx::query(
            "TRUNCATE TABLE earnings, kyc_submissions, profile_views, messages, \
             subscriptions, sessions, users CASCADE",
        )
        .execute(pool)
        .await
        .expect("Failed to clean database");
    }

    /// Create a test user directly in the database and return their ID
    pub async fn create_test_user(&self, email: &str, password: &str, role: &str) -> Uuid {
        let hasher = fanlink_auth::password::hasher::PasswordHasher::new();
        let hash = hasher
            .hash_password(password)
            .expect("Failed to hash password");
        let id = Uuid::new_v4();

        sqlx::query(
            "INSERT INTO users (id, email, password_hash, display_name, role) \
             VALUES ($1, $2, $3, $4, $5::user_role)",
        )
        .bind(id)
        .bind(email)
        .bind(&hash)
        .bind(email.split('@').next().unwrap_or("user"))
        .bind(role)
        .execute(&self.db_pool)
        .await
        .expect("Failed to create test user");

        id
    }

    /// Create a creator with an hourly rate set (accepts paid messages)
    pub async fn create_test_creator(&self, email: &str, rate_cents: i64) -> Uuid {
        let id = self.create_test_user(email, "password123", "creator").await;
        sqlx::query("UPDATE users SET hourly_rate_cents = $2 WHERE id = $1")
            .bind(id)
            .bind(rate_cents)
            .execute(&self.db_pool)
            .await
            .expect("Failed to set hourly rate");
        id
    }

    /// Mark a user's KYC approved directly in the database
    pub async fn approve_kyc(&self, user_id: Uuid) {
        sqlx::query("UPDATE users SET kyc_status = 'approved' WHERE id = $1")
            .bind(user_id)
            .execute(&self.db_pool)
            .await
            .expect("Failed to approve KYC");
    }

    /// Login and return JWT access token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let body = serde_json::json!({
            "email": email,
            "password": password,
        });

        let response = self
            .request("POST", "/api/auth/login", Some(body), None)
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .body
            .pointer("/data/access_token")
            .and_then(|v| v.as_str())
            .expect("No access_token in login response")
            .to_string()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
