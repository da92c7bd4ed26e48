//! Session entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A login session backing an issued access token.
///
/// The token embeds the session id; validation checks the row still exists,
/// is not revoked, and has not expired.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Session {
    /// Unique session identifier.
    pub id: Uuid,
    /// The owning user.
    pub user_id: Uuid,
    /// Whether the session was revoked by logout or admin action.
    pub revoked: bool,
    /// Hard expiry for the session.
    pub expires_at: DateTime<Utc>,
    /// Last request seen on this session.
    pub last_seen_at: DateTime<Utc>,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Whether this session may still authenticate requests.
    pub fn is_valid(&self) -> bool {
        !self.revoked && Utc::now() < self.expires_at
    }
}
