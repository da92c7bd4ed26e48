//! Subscription repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use fanlink_core::error::{AppError, ErrorKind};
use fanlink_core::result::AppResult;
use fanlink_core::types::pagination::{PageRequest, PageResponse};
use fanlink_entity::subscription::{CreateSubscription, Subscription, SubscriptionTier};

/// Repository for subscription CRUD and gating lookups.
#[derive(Debug, Clone)]
pub struct SubscriptionRepository {
    pool: PgPool,
}

impl SubscriptionRepository {
    /// Create a new subscription repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a subscription by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Subscription>> {
        sqlx::query_as::<_, Subscription>("SELECT * FROM subscriptions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find subscription", e)
            })
    }

    /// Find the subscription row for a (subscriber, creator) pair.
    pub async fn find_pair(
        &self,
        subscriber_id: Uuid,
        creator_id: Uuid,
    ) -> AppResult<Option<Subscription>> {
        sqlx::query_as::<_, Subscription>(
            "SELECT * FROM subscriptions WHERE subscriber_id = $1 AND creator_id = $2",
        )
        .bind(subscriber_id)
        .bind(creator_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find subscription pair", e)
        })
    }

    /// The messaging gate: does an active subscription exist for the pair?
    pub async fn has_active(&self, subscriber_id: Uuid, creator_id: Uuid) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM subscriptions \
             WHERE subscriber_id = $1 AND creator_id = $2 AND status = 'active')",
        )
        .bind(subscriber_id)
        .bind(creator_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check subscription", e)
        })?;
        Ok(exists)
    }

    /// Create a subscription. The unique pair constraint makes a duplicate
    /// subscribe a conflict; callers reactivate instead.
    pub async fn create(&self, data: &CreateSubscription) -> AppResult<Subscription> {
        sqlx::query_as::<_, Subscription>(
            "INSERT INTO subscriptions (subscriber_id, creator_id, tier, price_cents) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(data.subscriber_id)
        .bind(data.creator_id)
        .bind(data.tier)
        .bind(data.price_cents)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("subscriptions_pair_key") =>
            {
                AppError::conflict("Already subscribed to this creator".to_string())
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create subscription", e),
        })
    }

    /// Reactivate an existing (canceled or expired) subscription row.
    pub async fn reactivate(
        &self,
        id: Uuid,
        tier: SubscriptionTier,
        price_cents: i64,
    ) -> AppResult<Subscription> {
        sqlx::query_as::<_, Subscription>(
            "UPDATE subscriptions SET status = 'active', tier = $2, price_cents = $3, \
                                      canceled_at = NULL, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(tier)
        .bind(price_cents)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to reactivate subscription", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Subscription {id} not found")))
    }

    /// Mark a subscription canceled.
    pub async fn cancel(&self, id: Uuid) -> AppResult<Subscription> {
        sqlx::query_as::<_, Subscription>(
            "UPDATE subscriptions SET status = 'canceled', canceled_at = NOW(), updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to cancel subscription", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Subscription {id} not found")))
    }

    /// List a user's subscriptions (as subscriber).
    pub async fn find_by_subscriber(
        &self,
        subscriber_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Subscription>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM subscriptions WHERE subscriber_id = $1")
                .bind(subscriber_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count subscriptions", e)
                })?;

        let subs = sqlx::query_as::<_, Subscription>(
            "SELECT * FROM subscriptions WHERE subscriber_id = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(subscriber_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list subscriptions", e)
        })?;

        Ok(PageResponse::new(
            subs,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List a creator's active subscribers.
    pub async fn find_by_creator(
        &self,
        creator_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Subscription>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM subscriptions WHERE creator_id = $1 AND status = 'active'",
        )
        .bind(creator_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count subscribers", e)
        })?;

        let subs = sqlx::query_as::<_, Subscription>(
            "SELECT * FROM subscriptions WHERE creator_id = $1 AND status = 'active' \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(creator_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list subscribers", e))?;

        Ok(PageResponse::new(
            subs,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

}
