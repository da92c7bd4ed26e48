//! Account registration and own-profile operations.

use std::sync::Arc;

use tracing::info;

use fanlink_auth::password::PasswordHasher;
use fanlink_core::error::AppError;
use fanlink_database::repositories::user::UserRepository;
use fanlink_entity::user::{CreateUser, UpdateProfile, User, UserRole};

use crate::context::RequestContext;

/// Request to register a new account.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RegisterRequest {
    /// Email address (login credential).
    pub email: String,
    /// Plain-text password, hashed before storage.
    pub password: String,
    /// Public display name.
    pub display_name: String,
    /// Requested role. Only `creator` and `fan` can be self-assigned.
    pub role: UserRole,
}

/// Handles registration and a user's own profile.
#[derive(Debug, Clone)]
pub struct AccountService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Minimum accepted password length.
    password_min_length: usize,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        password_min_length: usize,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            password_min_length,
        }
    }

    /// Registers a new account. Admin accounts cannot be self-registered.
    pub async fn register(&self, req: RegisterRequest) -> Result<User, AppError> {
        if req.role == UserRole::Admin {
            return Err(AppError::forbidden("Cannot self-register an admin account"));
        }
        if req.password.len() < self.password_min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                self.password_min_length
            )));
        }
        let email = req.email.trim().to_lowercase();
        if !email.contains('@') || email.len() < 3 {
            return Err(AppError::validation("Invalid email address"));
        }
        let display_name = req.display_name.trim();
        if display_name.is_empty() {
            return Err(AppError::validation("Display name is required"));
        }

        let password_hash = self.hasher.hash_password(&req.password)?;
        let user = self
            .user_repo
            .create(&CreateUser {
                email,
                password_hash,
                display_name: display_name.to_string(),
                role: req.role,
            })
            .await?;

        info!(user_id = %user.id, role = %user.role, "Registered new account");
        Ok(user)
    }

    /// Returns the current user's own profile.
    pub async fn get_profile(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Updates the current user's profile. Only creators may set an hourly
    /// rate, since it prices their paid messages.
    pub async fn update_profile(
        &self,
        ctx: &RequestContext,
        data: UpdateProfile,
    ) -> Result<User, AppError> {
        if data.hourly_rate_cents.is_some() && !ctx.is_creator() {
            return Err(AppError::forbidden("Only creators can set an hourly rate"));
        }
        if let Some(rate) = data.hourly_rate_cents {
            if rate < 0 {
                return Err(AppError::validation("Hourly rate cannot be negative"));
            }
        }
        if let Some(ref name) = data.display_name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Display name cannot be empty"));
            }
        }

        self.user_repo.update_profile(ctx.user_id, &data).await
    }
}
