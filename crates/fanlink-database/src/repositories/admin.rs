//! Admin maintenance repository.

use sqlx::PgPool;

use fanlink_core::error::{AppError, ErrorKind};
use fanlink_core::result::AppResult;

/// Repository for destructive maintenance operations.
#[derive(Debug, Clone)]
pub struct AdminRepository {
    pool: PgPool,
}

impl AdminRepository {
    /// Create a new admin repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Truncate every application table. Development environments only;
    /// the service layer enforces the gate.
    pub async fn wipe_all_data(&self) -> AppResult<()> {
        sqlx::query(
            "TRUNCATE TABLE earnings, kyc_submissions, profile_views, messages, \
             subscriptions, sessions, users CASCADE",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to wipe data", e))?;

        tracing::warn!("All application data wiped");
        Ok(())
    }
}
