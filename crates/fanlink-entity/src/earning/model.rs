//! Earning entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use uuid::Uuid;

/// What produced an earning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "earning_kind", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EarningKind {
    /// Revenue from a paid direct message.
    PaidMessage,
    /// Revenue from a subscription.
    Subscription,
}

impl EarningKind {
    /// Return the kind as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PaidMessage => "paid_message",
            Self::Subscription => "subscription",
        }
    }
}

impl fmt::Display for EarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single revenue event credited to a creator.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Earning {
    /// Unique earning identifier.
    pub id: Uuid,
    /// The creator credited.
    pub creator_id: Uuid,
    /// The paying user.
    pub payer_id: Uuid,
    /// What produced the earning.
    pub kind: EarningKind,
    /// Amount in cents.
    pub amount_cents: i64,
    /// The message that produced this earning, if any.
    pub message_id: Option<Uuid>,
    /// The subscription that produced this earning, if any.
    pub subscription_id: Option<Uuid>,
    /// When the earning was recorded.
    pub created_at: DateTime<Utc>,
}
