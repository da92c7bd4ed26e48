//! Creator browsing handlers.

use axum::extract::{Path, Query, State};
use axum::Json;
use uuid::Uuid;

use fanlink_entity::profile_view::ProfileView;

use crate::dto::response::{ApiResponse, CreatorResponse, PaginatedResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// GET /api/creators
pub async fn list_creators(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PaginatedResponse<CreatorResponse>>>, ApiError> {
    let page = state
        .creator_service
        .list_creators(params.into_page_request())
        .await?;

    Ok(Json(ApiResponse::ok(PaginatedResponse::from_page(
        page.map(CreatorResponse::from),
    ))))
}

/// GET /api/creators/{id}
///
/// Viewing a profile records the view for the creator's "who viewed me"
/// list.
pub async fn get_creator(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<CreatorResponse>>, ApiError> {
    let user = state.creator_service.get_creator(&auth, id).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// GET /api/creators/me/views
pub async fn list_profile_views(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PaginatedResponse<ProfileView>>>, ApiError> {
    let page = state
        .creator_service
        .list_profile_views(&auth, params.into_page_request())
        .await?;

    Ok(Json(ApiResponse::ok(PaginatedResponse::from_page(page))))
}
