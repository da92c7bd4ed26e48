//! Profile view entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Records that a user viewed a creator's profile.
///
/// One row per (viewer, viewed) pair; repeat visits bump `view_count` and
/// `last_seen_at` via an `ON CONFLICT` upsert.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProfileView {
    /// Unique row identifier.
    pub id: Uuid,
    /// The viewing user.
    pub viewer_id: Uuid,
    /// The viewed creator.
    pub viewed_id: Uuid,
    /// Number of distinct visits recorded.
    pub view_count: i64,
    /// The most recent visit.
    pub last_seen_at: DateTime<Utc>,
    /// The first visit.
    pub created_at: DateTime<Utc>,
}
