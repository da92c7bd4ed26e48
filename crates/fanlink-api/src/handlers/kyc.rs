//! KYC handlers — upload URL issuance, submission, status, admin review.

use axum::extract::{Path, Query, State};
use axum::Json;
use uuid::Uuid;
use validator::Validate;

use fanlink_core::error::AppError;
use fanlink_entity::kyc::KycSubmission;
use fanlink_service::kyc::service::KycState;
use fanlink_storage::presign::PresignedUpload;

use crate::dto::request::{ReviewKycRequest, SubmitKycRequest, UploadUrlRequest};
use crate::dto::response::{ApiResponse, PaginatedResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// POST /api/kyc/upload-url
pub async fn request_upload_url(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UploadUrlRequest>,
) -> Result<Json<ApiResponse<PresignedUpload>>, ApiError> {
    let upload = state
        .kyc_service
        .request_upload_url(&auth, &req.content_type)
        .await?;

    Ok(Json(ApiResponse::ok(upload)))
}

/// POST /api/kyc/submit
pub async fn submit(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<SubmitKycRequest>,
) -> Result<Json<ApiResponse<KycSubmission>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let submission = state
        .kyc_service
        .submit(&auth, req.document_type, &req.document_key)
        .await?;

    Ok(Json(ApiResponse::ok(submission)))
}

/// GET /api/kyc/status
pub async fn status(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<KycState>>, ApiError> {
    let kyc_state = state.kyc_service.get_state(&auth).await?;
    Ok(Json(ApiResponse::ok(kyc_state)))
}

/// GET /api/kyc/pending — admin only.
pub async fn list_pending(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PaginatedResponse<KycSubmission>>>, ApiError> {
    let page = state
        .kyc_service
        .list_pending(&auth, params.into_page_request())
        .await?;

    Ok(Json(ApiResponse::ok(PaginatedResponse::from_page(page))))
}

/// POST /api/kyc/{id}/review — admin only.
pub async fn review(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<ReviewKycRequest>,
) -> Result<Json<ApiResponse<KycSubmission>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let submission = state
        .kyc_service
        .review(&auth, id, req.approve, req.note.as_deref())
        .await?;

    Ok(Json(ApiResponse::ok(submission)))
}
