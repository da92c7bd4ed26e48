//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fanlink_core::types::pagination::PageResponse;
use fanlink_entity::user::User;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Paginated response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T: Serialize> {
    /// Items in this page.
    pub items: Vec<T>,
    /// Total item count.
    pub total: u64,
    /// Current page.
    pub page: u64,
    /// Items per page.
    pub per_page: u64,
    /// Total pages.
    pub total_pages: u64,
}

impl<T: Serialize> PaginatedResponse<T> {
    /// Converts a domain page into the wire shape.
    pub fn from_page(page: PageResponse<T>) -> Self {
        Self {
            total: page.total_items,
            page: page.page,
            per_page: page.page_size,
            total_pages: page.total_pages,
            items: page.items,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Access token.
    pub access_token: String,
    /// Access token expiration.
    pub expires_at: DateTime<Utc>,
    /// User info.
    pub user: UserResponse,
}

/// User summary for responses. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Email.
    pub email: String,
    /// Display name.
    pub display_name: String,
    /// Role.
    pub role: String,
    /// KYC status.
    pub kyc_status: String,
    /// Whether a Stripe account is connected.
    pub payouts_connected: bool,
    /// Hourly rate in cents, if set.
    pub hourly_rate_cents: Option<i64>,
    /// Bio.
    pub bio: Option<String>,
    /// Avatar storage key.
    pub avatar_key: Option<String>,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            display_name: user.display_name,
            role: user.role.to_string(),
            kyc_status: user.kyc_status.to_string(),
            payouts_connected: user.stripe_account_id.is_some(),
            hourly_rate_cents: user.hourly_rate_cents,
            bio: user.bio,
            avatar_key: user.avatar_key,
            created_at: user.created_at,
        }
    }
}

/// Public creator profile, as seen by other users. Omits the email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatorResponse {
    /// User ID.
    pub id: Uuid,
    /// Display name.
    pub display_name: String,
    /// KYC status.
    pub kyc_status: String,
    /// Hourly rate in cents, if set.
    pub hourly_rate_cents: Option<i64>,
    /// Bio.
    pub bio: Option<String>,
    /// Avatar storage key.
    pub avatar_key: Option<String>,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<User> for CreatorResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            display_name: user.display_name,
            kyc_status: user.kyc_status.to_string(),
            hourly_rate_cents: user.hourly_rate_cents,
            bio: user.bio,
            avatar_key: user.avatar_key,
            created_at: user.created_at,
        }
    }
}

/// Unread message count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnreadCountResponse {
    /// Number of unread messages.
    pub unread: u64,
}

/// Stripe Connect authorize URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectUrlResponse {
    /// URL to redirect the creator to.
    pub url: String,
}
