//! KYC service. Issues presigned upload URLs, registers submissions, and
//! applies admin review decisions to both the submission and the user.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use fanlink_core::error::AppError;
use fanlink_core::types::pagination::{PageRequest, PageResponse};
use fanlink_database::repositories::kyc::KycRepository;
use fanlink_database::repositories::user::UserRepository;
use fanlink_entity::kyc::{CreateKycSubmission, DocumentType, KycSubmission, SubmissionStatus};
use fanlink_entity::user::KycStatus;
use fanlink_storage::presign::{PresignedUpload, UploadUrlIssuer};

use crate::context::RequestContext;

/// Content types accepted for identity documents.
const ALLOWED_CONTENT_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/webp",
    "application/pdf",
];

/// A user's KYC state: the status on their account plus the latest
/// submission, if any.
#[derive(Debug, Clone, serde::Serialize)]
pub struct KycState {
    /// Account-level verification status.
    pub kyc_status: KycStatus,
    /// Most recent submission.
    pub latest_submission: Option<KycSubmission>,
}

/// Handles KYC uploads, submissions, and admin review.
#[derive(Debug, Clone)]
pub struct KycService {
    /// KYC submission repository.
    kyc_repo: Arc<KycRepository>,
    /// User repository, to sync account status on review.
    user_repo: Arc<UserRepository>,
    /// Presigned upload URL issuer.
    upload_issuer: Arc<UploadUrlIssuer>,
}

impl KycService {
    /// Creates a new KYC service.
    pub fn new(
        kyc_repo: Arc<KycRepository>,
        user_repo: Arc<UserRepository>,
        upload_issuer: Arc<UploadUrlIssuer>,
    ) -> Self {
        Self {
            kyc_repo,
            user_repo,
            upload_issuer,
        }
    }

    /// Issues a presigned upload URL for an identity document. The client
    /// PUTs the file directly to object storage, then registers the
    /// returned key via [`KycService::submit`].
    pub async fn request_upload_url(
        &self,
        ctx: &RequestContext,
        content_type: &str,
    ) -> Result<PresignedUpload, AppError> {
        if !ALLOWED_CONTENT_TYPES.contains(&content_type) {
            return Err(AppError::validation(format!(
                "Unsupported document content type: '{content_type}'. \
                 Expected one of: {}",
                ALLOWED_CONTENT_TYPES.join(", ")
            )));
        }
        self.upload_issuer
            .presign_kyc_upload(ctx.user_id, content_type)
            .await
    }

    /// Registers an uploaded document as a KYC submission and moves the
    /// account to pending review.
    ///
    /// The key must be under the caller's own prefix; a pending submission
    /// blocks another one.
    pub async fn submit(
        &self,
        ctx: &RequestContext,
        document_type: DocumentType,
        document_key: &str,
    ) -> Result<KycSubmission, AppError> {
        let expected_prefix = format!("kyc/{}/", ctx.user_id);
        if !document_key.starts_with(&expected_prefix) {
            return Err(AppError::validation(
                "Document key does not belong to this user",
            ));
        }

        if let Some(latest) = self.kyc_repo.find_latest_for_user(ctx.user_id).await? {
            if latest.status == SubmissionStatus::Pending {
                return Err(AppError::conflict(
                    "A submission is already pending review",
                ));
            }
        }

        let submission = self
            .kyc_repo
            .create(&CreateKycSubmission {
                user_id: ctx.user_id,
                document_type,
                document_key: document_key.to_string(),
            })
            .await?;
        self.user_repo
            .update_kyc_status(ctx.user_id, KycStatus::Pending)
            .await?;

        info!(
            submission_id = %submission.id,
            user_id = %ctx.user_id,
            document_type = %document_type,
            "KYC submission registered"
        );
        Ok(submission)
    }

    /// Returns the current user's KYC state.
    pub async fn get_state(&self, ctx: &RequestContext) -> Result<KycState, AppError> {
        let user = self
            .user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;
        let latest_submission = self.kyc_repo.find_latest_for_user(ctx.user_id).await?;

        Ok(KycState {
            kyc_status: user.kyc_status,
            latest_submission,
        })
    }

    /// Lists submissions awaiting review. Admin only.
    pub async fn list_pending(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> Result<PageResponse<KycSubmission>, AppError> {
        if !ctx.is_admin() {
            return Err(AppError::forbidden("Admin access required"));
        }
        self.kyc_repo.find_pending(&page).await
    }

    /// Applies an admin review decision. Approval or rejection updates
    /// both the submission and the submitter's account status.
    pub async fn review(
        &self,
        ctx: &RequestContext,
        submission_id: Uuid,
        approve: bool,
        note: Option<&str>,
    ) -> Result<KycSubmission, AppError> {
        if !ctx.is_admin() {
            return Err(AppError::forbidden("Admin access required"));
        }

        let submission = self
            .kyc_repo
            .find_by_id(submission_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Submission {submission_id} not found"))
            })?;
        if submission.status != SubmissionStatus::Pending {
            return Err(AppError::conflict("Submission has already been reviewed"));
        }

        let (submission_status, account_status) = if approve {
            (SubmissionStatus::Approved, KycStatus::Approved)
        } else {
            (SubmissionStatus::Rejected, KycStatus::Rejected)
        };

        let reviewed = self
            .kyc_repo
            .review(submission_id, submission_status, ctx.user_id, note)
            .await?;
        self.user_repo
            .update_kyc_status(submission.user_id, account_status)
            .await?;

        info!(
            submission_id = %submission_id,
            reviewer = %ctx.user_id,
            status = %submission_status,
            "KYC submission reviewed"
        );
        Ok(reviewed)
    }
}
