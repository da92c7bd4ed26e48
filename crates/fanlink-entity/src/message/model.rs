//! Message entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A direct message between two users.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Message {
    /// Unique message identifier.
    pub id: Uuid,
    /// The sending user.
    pub sender_id: Uuid,
    /// The receiving user.
    pub recipient_id: Uuid,
    /// Message body.
    pub content: String,
    /// Whether this message carried a charge.
    pub is_paid: bool,
    /// Charge in cents (zero for free messages).
    pub cost_cents: i64,
    /// Whether the recipient has read the message.
    pub is_read: bool,
    /// When the message was sent.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMessage {
    /// The sending user.
    pub sender_id: Uuid,
    /// The receiving user.
    pub recipient_id: Uuid,
    /// Message body.
    pub content: String,
    /// Whether this message carries a charge.
    pub is_paid: bool,
    /// Charge in cents (zero for free messages).
    pub cost_cents: i64,
}
