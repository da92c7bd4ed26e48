//! Profile view repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use fanlink_core::error::{AppError, ErrorKind};
use fanlink_core::result::AppResult;
use fanlink_core::types::pagination::{PageRequest, PageResponse};
use fanlink_entity::profile_view::ProfileView;

/// Repository for profile view upserts and listings.
#[derive(Debug, Clone)]
pub struct ProfileViewRepository {
    pool: PgPool,
}

impl ProfileViewRepository {
    /// Create a new profile view repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record a visit. The unique (viewer, viewed) constraint turns repeat
    /// visits into an update of `view_count` and `last_seen_at`.
    pub async fn record(&self, viewer_id: Uuid, viewed_id: Uuid) -> AppResult<ProfileView> {
        sqlx::query_as::<_, ProfileView>(
            "INSERT INTO profile_views (viewer_id, viewed_id) \
             VALUES ($1, $2) \
             ON CONFLICT ON CONSTRAINT profile_views_pair_key \
             DO UPDATE SET view_count = profile_views.view_count + 1, last_seen_at = NOW() \
             RETURNING *",
        )
        .bind(viewer_id)
        .bind(viewed_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to record profile view", e)
        })
    }

    /// List who viewed a profile, most recent first.
    pub async fn find_by_viewed(
        &self,
        viewed_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<ProfileView>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM profile_views WHERE viewed_id = $1")
                .bind(viewed_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count profile views", e)
                })?;

        let views = sqlx::query_as::<_, ProfileView>(
            "SELECT * FROM profile_views WHERE viewed_id = $1 \
             ORDER BY last_seen_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(viewed_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list profile views", e)
        })?;

        Ok(PageResponse::new(
            views,
            page.page,
            page.page_size,
            total as u64,
        ))
    }
}
