//! Payout handlers — Stripe Connect onboarding and earnings.

use axum::extract::{Query, State};
use axum::Json;

use fanlink_service::payout::service::EarningsSummary;

use crate::dto::request::ConnectCallbackParams;
use crate::dto::response::{ApiResponse, ConnectUrlResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// GET /api/payouts/connect
pub async fn connect(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<ConnectUrlResponse>>, ApiError> {
    let url = state.payout_service.connect_url(&auth).await?;
    Ok(Json(ApiResponse::ok(ConnectUrlResponse { url })))
}

/// GET /api/payouts/callback
pub async fn callback(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<ConnectCallbackParams>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state
        .payout_service
        .complete_onboarding(&auth, &params.code, &params.state)
        .await?;

    Ok(Json(ApiResponse::ok(user.into())))
}

/// GET /api/payouts/earnings
pub async fn earnings(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<EarningsSummary>>, ApiError> {
    let summary = state
        .payout_service
        .earnings(&auth, params.into_page_request())
        .await?;

    Ok(Json(ApiResponse::ok(summary)))
}
