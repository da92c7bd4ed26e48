//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::kyc_status::KycStatus;
use super::role::UserRole;

/// A registered user on the FanLink platform.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Email address (unique, login credential).
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Public display name.
    pub display_name: String,
    /// User role.
    pub role: UserRole,
    /// Identity verification status.
    pub kyc_status: KycStatus,
    /// Connected Stripe account id (`acct_...`), set after Connect onboarding.
    pub stripe_account_id: Option<String>,
    /// Creator's hourly rate in cents; prices paid messages.
    pub hourly_rate_cents: Option<i64>,
    /// Short profile bio.
    pub bio: Option<String>,
    /// Avatar object storage key.
    pub avatar_key: Option<String>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Whether this user publishes a creator profile.
    pub fn is_creator(&self) -> bool {
        self.role.is_creator()
    }

    /// Whether this user has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Whether this user can receive paid messages.
    pub fn accepts_paid_messages(&self) -> bool {
        self.is_creator() && self.hourly_rate_cents.is_some()
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Display name.
    pub display_name: String,
    /// Assigned role.
    pub role: UserRole,
}

/// Data for updating a user's own profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfile {
    /// New display name.
    pub display_name: Option<String>,
    /// New bio.
    pub bio: Option<String>,
    /// New hourly rate in cents (creators only).
    pub hourly_rate_cents: Option<i64>,
    /// New avatar storage key.
    pub avatar_key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user(role: UserRole, rate: Option<i64>) -> User {
        User {
            id: Uuid::new_v4(),
            email: "test@example.com".to_string(),
            password_hash: "x".to_string(),
            display_name: "Test".to_string(),
            role,
            kyc_status: KycStatus::NotSubmitted,
            stripe_account_id: None,
            hourly_rate_cents: rate,
            bio: None,
            avatar_key: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_accepts_paid_messages() {
        assert!(sample_user(UserRole::Creator, Some(5000)).accepts_paid_messages());
        assert!(!sample_user(UserRole::Creator, None).accepts_paid_messages());
        assert!(!sample_user(UserRole::Fan, Some(5000)).accepts_paid_messages());
    }
}
