//! Auth handlers — register, login, logout.

use axum::extract::State;
use axum::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use validator::Validate;

use fanlink_core::error::AppError;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{ApiResponse, LoginResponse, MessageResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let user = state
        .account_service
        .register(fanlink_service::account::service::RegisterRequest {
            email: req.email,
            password: req.password,
            display_name: req.display_name,
            role: req.role,
        })
        .await?;

    Ok(Json(ApiResponse::ok(user.into())))
}

/// POST /api/auth/login
///
/// Returns the token in the body and also sets it as a cookie so browser
/// clients work without an Authorization header.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<ApiResponse<LoginResponse>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let outcome = state
        .session_manager
        .login(&req.email, &req.password)
        .await?;

    let cookie = Cookie::build((
        state.config.auth.cookie_name.clone(),
        outcome.access_token.clone(),
    ))
    .path("/")
    .http_only(true)
    .same_site(SameSite::Lax)
    .build();

    Ok((
        jar.add(cookie),
        Json(ApiResponse::ok(LoginResponse {
            access_token: outcome.access_token,
            expires_at: outcome.expires_at,
            user: outcome.user.into(),
        })),
    ))
}

/// POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
    auth: AuthUser,
) -> Result<(CookieJar, Json<ApiResponse<MessageResponse>>), ApiError> {
    state.session_manager.logout(auth.session_id).await?;

    let jar = jar.remove(Cookie::from(state.config.auth.cookie_name.clone()));

    Ok((
        jar,
        Json(ApiResponse::ok(MessageResponse {
            message: "Logged out successfully".to_string(),
        })),
    ))
}
