//! Session lifecycle — login, validation, logout.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use fanlink_core::config::auth::AuthConfig;
use fanlink_core::error::AppError;
use fanlink_database::repositories::session::SessionRepository;
use fanlink_database::repositories::user::UserRepository;
use fanlink_entity::session::Session;
use fanlink_entity::user::User;

use crate::jwt::encoder::JwtEncoder;
use crate::password::hasher::PasswordHasher;

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The authenticated user.
    pub user: User,
    /// Signed access token embedding the session id.
    pub access_token: String,
    /// Token expiry.
    pub expires_at: DateTime<Utc>,
}

/// Manages login sessions backing issued tokens.
#[derive(Debug, Clone)]
pub struct SessionManager {
    user_repo: Arc<UserRepository>,
    session_repo: Arc<SessionRepository>,
    hasher: Arc<PasswordHasher>,
    encoder: Arc<JwtEncoder>,
    session_ttl_hours: i64,
}

impl SessionManager {
    /// Creates a new session manager.
    pub fn new(
        user_repo: Arc<UserRepository>,
        session_repo: Arc<SessionRepository>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
        config: &AuthConfig,
    ) -> Self {
        Self {
            user_repo,
            session_repo,
            hasher,
            encoder,
            session_ttl_hours: config.session_ttl_hours as i64,
        }
    }

    /// Verifies credentials and opens a session.
    ///
    /// Credential failures are indistinguishable to the caller: unknown
    /// email and wrong password both return the same unauthorized error.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AppError> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid email or password"))?;

        let valid = self.hasher.verify_password(password, &user.password_hash)?;
        if !valid {
            return Err(AppError::unauthorized("Invalid email or password"));
        }

        let expires_at = Utc::now() + chrono::Duration::hours(self.session_ttl_hours);
        let session = self.session_repo.create(user.id, expires_at).await?;

        let (access_token, token_expires_at) =
            self.encoder
                .generate_access_token(user.id, session.id, user.role)?;

        info!(user_id = %user.id, session_id = %session.id, "User logged in");

        Ok(LoginOutcome {
            user,
            access_token,
            expires_at: token_expires_at,
        })
    }

    /// Validates that a session may still authenticate requests and bumps
    /// its last-seen timestamp.
    pub async fn validate_session(&self, session_id: Uuid) -> Result<Session, AppError> {
        let session = self
            .session_repo
            .find_by_id(session_id)
            .await?
            .ok_or_else(|| AppError::unauthorized("Session not found"))?;

        if !session.is_valid() {
            return Err(AppError::unauthorized("Session expired or revoked"));
        }

        self.session_repo.touch(session.id).await?;
        Ok(session)
    }

    /// Revokes a session (logout).
    pub async fn logout(&self, session_id: Uuid) -> Result<(), AppError> {
        self.session_repo.revoke(session_id).await?;
        info!(session_id = %session_id, "Session revoked");
        Ok(())
    }
}
