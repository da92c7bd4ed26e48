//! Subscription entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::SubscriptionStatus;
use super::tier::SubscriptionTier;

/// A subscription linking a subscriber to a creator.
///
/// The (subscriber_id, creator_id) pair is unique; resubscribing after a
/// cancellation reactivates the existing row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Subscription {
    /// Unique subscription identifier.
    pub id: Uuid,
    /// The subscribing user.
    pub subscriber_id: Uuid,
    /// The creator being subscribed to.
    pub creator_id: Uuid,
    /// Lifecycle status.
    pub status: SubscriptionStatus,
    /// Subscription tier.
    pub tier: SubscriptionTier,
    /// Monthly price in cents, frozen at subscription time.
    pub price_cents: i64,
    /// When the subscription was created.
    pub created_at: DateTime<Utc>,
    /// When the subscription was last updated.
    pub updated_at: DateTime<Utc>,
    /// When the subscription was canceled (if it was).
    pub canceled_at: Option<DateTime<Utc>>,
}

impl Subscription {
    /// Whether this subscription currently grants access.
    pub fn is_active(&self) -> bool {
        self.status.grants_access()
    }
}

/// Data required to create a subscription.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSubscription {
    /// The subscribing user.
    pub subscriber_id: Uuid,
    /// The creator being subscribed to.
    pub creator_id: Uuid,
    /// Chosen tier.
    pub tier: SubscriptionTier,
    /// Price in cents at subscription time.
    pub price_cents: i64,
}
