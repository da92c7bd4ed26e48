//! Earning repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use fanlink_core::error::{AppError, ErrorKind};
use fanlink_core::result::AppResult;
use fanlink_core::types::pagination::{PageRequest, PageResponse};
use fanlink_entity::earning::{Earning, EarningKind};

/// Repository for creator earnings.
#[derive(Debug, Clone)]
pub struct EarningRepository {
    pool: PgPool,
}

impl EarningRepository {
    /// Create a new earning repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record a subscription earning.
    pub async fn create_subscription_earning(
        &self,
        creator_id: Uuid,
        payer_id: Uuid,
        subscription_id: Uuid,
        amount_cents: i64,
    ) -> AppResult<Earning> {
        sqlx::query_as::<_, Earning>(
            "INSERT INTO earnings (creator_id, payer_id, kind, amount_cents, subscription_id) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(creator_id)
        .bind(payer_id)
        .bind(EarningKind::Subscription)
        .bind(amount_cents)
        .bind(subscription_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to record earning", e))
    }

    /// List a creator's earnings, newest first.
    pub async fn find_by_creator(
        &self,
        creator_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Earning>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM earnings WHERE creator_id = $1")
            .bind(creator_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count earnings", e)
            })?;

        let earnings = sqlx::query_as::<_, Earning>(
            "SELECT * FROM earnings WHERE creator_id = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(creator_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list earnings", e))?;

        Ok(PageResponse::new(
            earnings,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Sum a creator's lifetime earnings in cents.
    ///
    /// `SUM` on a BIGINT column yields NUMERIC, so the result is cast back
    /// to BIGINT in SQL.
    pub async fn total_for_creator(&self, creator_id: Uuid) -> AppResult<i64> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COALESCE(SUM(amount_cents), 0)::BIGINT FROM earnings WHERE creator_id = $1",
        )
        .bind(creator_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to sum earnings", e))?;
        Ok(total)
    }
}
