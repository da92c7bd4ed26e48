//! Admin handlers.

use axum::extract::State;
use axum::Json;

use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/admin/wipe
///
/// Destroys all platform data. Admin only, and refused unless the
/// environment explicitly allows wipes.
pub async fn wipe_data(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.admin_service.wipe_all_data(&auth).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "All data wiped".to_string(),
    })))
}
