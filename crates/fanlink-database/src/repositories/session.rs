//! Session repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use fanlink_core::error::{AppError, ErrorKind};
use fanlink_core::result::AppResult;
use fanlink_entity::session::Session;

/// Repository for login sessions.
#[derive(Debug, Clone)]
pub struct SessionRepository {
    pool: PgPool,
}

impl SessionRepository {
    /// Create a new session repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a session for a user with the given expiry.
    pub async fn create(&self, user_id: Uuid, expires_at: DateTime<Utc>) -> AppResult<Session> {
        sqlx::query_as::<_, Session>(
            "INSERT INTO sessions (user_id, expires_at) VALUES ($1, $2) RETURNING *",
        )
        .bind(user_id)
        .bind(expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create session", e))
    }

    /// Find a session by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Session>> {
        sqlx::query_as::<_, Session>("SELECT * FROM sessions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find session", e))
    }

    /// Bump the last-seen timestamp.
    pub async fn touch(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("UPDATE sessions SET last_seen_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to touch session", e))?;
        Ok(())
    }

    /// Revoke a session.
    pub async fn revoke(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("UPDATE sessions SET revoked = TRUE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to revoke session", e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Session {id} not found")));
        }
        Ok(())
    }

    /// Revoke every session belonging to a user.
    pub async fn revoke_all_for_user(&self, user_id: Uuid) -> AppResult<u64> {
        let result = sqlx::query("UPDATE sessions SET revoked = TRUE WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to revoke user sessions", e)
            })?;
        Ok(result.rows_affected())
    }
}
