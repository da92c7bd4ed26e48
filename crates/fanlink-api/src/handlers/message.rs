//! Messaging handlers.

use axum::extract::{Path, Query, State};
use axum::Json;
use uuid::Uuid;
use validator::Validate;

use fanlink_core::error::AppError;
use fanlink_entity::message::Message;

use crate::dto::request::SendMessageRequest;
use crate::dto::response::{ApiResponse, PaginatedResponse, UnreadCountResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// POST /api/messages
pub async fn send_message(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<SendMessageRequest>,
) -> Result<Json<ApiResponse<Message>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let message = state
        .messaging_service
        .send_message(
            &auth,
            fanlink_service::messaging::service::SendMessageRequest {
                recipient_id: req.recipient_id,
                content: req.content,
                paid: req.paid,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(message)))
}

/// GET /api/messages/inbox
pub async fn inbox(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PaginatedResponse<Message>>>, ApiError> {
    let page = state
        .messaging_service
        .get_inbox(&auth, params.into_page_request())
        .await?;

    Ok(Json(ApiResponse::ok(PaginatedResponse::from_page(page))))
}

/// GET /api/messages/conversation/{user_id}
pub async fn conversation(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<Uuid>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PaginatedResponse<Message>>>, ApiError> {
    let page = state
        .messaging_service
        .get_conversation(&auth, user_id, params.into_page_request())
        .await?;

    Ok(Json(ApiResponse::ok(PaginatedResponse::from_page(page))))
}

/// PUT /api/messages/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Message>>, ApiError> {
    let message = state.messaging_service.mark_read(&auth, id).await?;
    Ok(Json(ApiResponse::ok(message)))
}

/// GET /api/messages/unread-count
pub async fn unread_count(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UnreadCountResponse>>, ApiError> {
    let unread = state.messaging_service.count_unread(&auth).await?;
    Ok(Json(ApiResponse::ok(UnreadCountResponse { unread })))
}
