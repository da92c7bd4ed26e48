//! Subscription handlers.

use axum::extract::{Path, Query, State};
use axum::Json;
use uuid::Uuid;

use fanlink_entity::subscription::Subscription;

use crate::dto::request::SubscribeRequest;
use crate::dto::response::{ApiResponse, PaginatedResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// POST /api/subscriptions
pub async fn subscribe(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<SubscribeRequest>,
) -> Result<Json<ApiResponse<Subscription>>, ApiError> {
    let subscription = state
        .subscription_service
        .subscribe(&auth, req.creator_id, req.tier)
        .await?;

    Ok(Json(ApiResponse::ok(subscription)))
}

/// GET /api/subscriptions
pub async fn list_subscriptions(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PaginatedResponse<Subscription>>>, ApiError> {
    let page = state
        .subscription_service
        .list_subscriptions(&auth, params.into_page_request())
        .await?;

    Ok(Json(ApiResponse::ok(PaginatedResponse::from_page(page))))
}

/// GET /api/subscriptions/subscribers
pub async fn list_subscribers(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PaginatedResponse<Subscription>>>, ApiError> {
    let page = state
        .subscription_service
        .list_subscribers(&auth, params.into_page_request())
        .await?;

    Ok(Json(ApiResponse::ok(PaginatedResponse::from_page(page))))
}

/// DELETE /api/subscriptions/{id}
pub async fn cancel_subscription(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Subscription>>, ApiError> {
    let subscription = state.subscription_service.cancel(&auth, id).await?;
    Ok(Json(ApiResponse::ok(subscription)))
}
