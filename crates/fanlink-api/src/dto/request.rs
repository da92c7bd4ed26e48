//! Request DTOs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use fanlink_entity::kyc::DocumentType;
use fanlink_entity::subscription::SubscriptionTier;
use fanlink_entity::user::UserRole;

/// Registration request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Email address.
    #[validate(email)]
    pub email: String,
    /// Password (minimum length enforced by the account service).
    #[validate(length(min = 1, max = 128))]
    pub password: String,
    /// Display name.
    #[validate(length(min = 1, max = 100))]
    pub display_name: String,
    /// Requested role: `creator` or `fan`.
    pub role: UserRole,
}

/// Login request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(email)]
    pub email: String,
    /// Password.
    #[validate(length(min = 1))]
    pub password: String,
}

/// Own-profile update request. All fields optional.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    /// New display name.
    #[validate(length(min = 1, max = 100))]
    pub display_name: Option<String>,
    /// New bio.
    #[validate(length(max = 1000))]
    pub bio: Option<String>,
    /// New hourly rate in cents (creators only).
    pub hourly_rate_cents: Option<i64>,
    /// New avatar storage key.
    pub avatar_key: Option<String>,
}

/// Subscribe request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscribeRequest {
    /// The creator to subscribe to.
    pub creator_id: Uuid,
    /// Chosen tier.
    pub tier: SubscriptionTier,
}

/// Send-message request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendMessageRequest {
    /// The receiving user.
    pub recipient_id: Uuid,
    /// Message body.
    #[validate(length(min = 1, max = 5000))]
    pub content: String,
    /// Send as a paid message.
    #[serde(default)]
    pub paid: bool,
}

/// Request for a presigned KYC document upload URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadUrlRequest {
    /// Content type the document will be uploaded with.
    pub content_type: String,
}

/// KYC submission registration request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitKycRequest {
    /// Document type.
    pub document_type: DocumentType,
    /// Object storage key returned by the upload URL endpoint.
    #[validate(length(min = 1, max = 512))]
    pub document_key: String,
}

/// Admin KYC review request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReviewKycRequest {
    /// Approve (`true`) or reject (`false`).
    pub approve: bool,
    /// Optional reviewer note, e.g. rejection reason.
    #[validate(length(max = 1000))]
    pub note: Option<String>,
}

/// Stripe Connect OAuth callback query parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectCallbackParams {
    /// Authorization code from Stripe.
    pub code: String,
    /// State parameter carrying the user id.
    pub state: String,
}
