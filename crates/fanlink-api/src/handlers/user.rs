//! Own-profile handlers.

use axum::extract::State;
use axum::Json;
use validator::Validate;

use fanlink_core::error::AppError;
use fanlink_entity::user::UpdateProfile;

use crate::dto::request::UpdateProfileRequest;
use crate::dto::response::{ApiResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/users/me
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.account_service.get_profile(&auth).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// PUT /api/users/me
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let user = state
        .account_service
        .update_profile(
            &auth,
            UpdateProfile {
                display_name: req.display_name,
                bio: req.bio,
                hourly_rate_cents: req.hourly_rate_cents,
                avatar_key: req.avatar_key,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(user.into())))
}
