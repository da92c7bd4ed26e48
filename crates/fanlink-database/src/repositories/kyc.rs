//! KYC submission repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use fanlink_core::error::{AppError, ErrorKind};
use fanlink_core::result::AppResult;
use fanlink_core::types::pagination::{PageRequest, PageResponse};
use fanlink_entity::kyc::{CreateKycSubmission, KycSubmission, SubmissionStatus};

/// Repository for KYC submissions.
#[derive(Debug, Clone)]
pub struct KycRepository {
    pool: PgPool,
}

impl KycRepository {
    /// Create a new KYC repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a submission by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<KycSubmission>> {
        sqlx::query_as::<_, KycSubmission>("SELECT * FROM kyc_submissions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find KYC submission", e)
            })
    }

    /// The most recent submission for a user, if any.
    pub async fn find_latest_for_user(&self, user_id: Uuid) -> AppResult<Option<KycSubmission>> {
        sqlx::query_as::<_, KycSubmission>(
            "SELECT * FROM kyc_submissions WHERE user_id = $1 ORDER BY created_at DESC LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find latest submission", e)
        })
    }

    /// Register a submission.
    pub async fn create(&self, data: &CreateKycSubmission) -> AppResult<KycSubmission> {
        sqlx::query_as::<_, KycSubmission>(
            "INSERT INTO kyc_submissions (user_id, document_type, document_key) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(data.user_id)
        .bind(data.document_type)
        .bind(&data.document_key)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create KYC submission", e)
        })
    }

    /// Record an admin review decision.
    pub async fn review(
        &self,
        id: Uuid,
        status: SubmissionStatus,
        reviewer_id: Uuid,
        note: Option<&str>,
    ) -> AppResult<KycSubmission> {
        sqlx::query_as::<_, KycSubmission>(
            "UPDATE kyc_submissions \
             SET status = $2, reviewed_by = $3, reviewed_at = NOW(), review_note = $4 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .bind(reviewer_id)
        .bind(note)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to review KYC submission", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("KYC submission {id} not found")))
    }

    /// List submissions awaiting review, oldest first.
    pub async fn find_pending(&self, page: &PageRequest) -> AppResult<PageResponse<KycSubmission>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM kyc_submissions WHERE status = 'pending'")
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count submissions", e)
                })?;

        let submissions = sqlx::query_as::<_, KycSubmission>(
            "SELECT * FROM kyc_submissions WHERE status = 'pending' \
             ORDER BY created_at ASC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list submissions", e)
        })?;

        Ok(PageResponse::new(
            submissions,
            page.page,
            page.page_size,
            total as u64,
        ))
    }
}
