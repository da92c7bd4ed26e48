//! `AuthUser` extractor — pulls the JWT from the Authorization header or
//! the auth cookie, validates it, and injects request context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;

use fanlink_core::error::AppError;
use fanlink_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_token(parts, &state.config.auth.cookie_name)
            .ok_or_else(|| AppError::unauthorized("Missing authentication token"))?;

        let claims = state.jwt_decoder.decode_access_token(&token)?;

        // The session must still be live even if the token has not expired
        state
            .session_manager
            .validate_session(claims.session_id())
            .await?;

        Ok(AuthUser(RequestContext::new(
            claims.user_id(),
            claims.session_id(),
            claims.role,
        )))
    }
}

/// Bearer header wins; the cookie is the browser fallback.
fn extract_token(parts: &Parts, cookie_name: &str) -> Option<String> {
    if let Some(header) = parts
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
    {
        if let Some(token) = header.strip_prefix("Bearer ") {
            return Some(token.to_string());
        }
    }

    CookieJar::from_headers(&parts.headers)
        .get(cookie_name)
        .map(|c| c.value().to_string())
}
