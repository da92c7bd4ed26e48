//! Request context carrying the authenticated user and session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fanlink_entity::user::UserRole;

/// Context for the current authenticated request.
///
/// Extracted by middleware and passed into service methods so that
/// every operation knows *who* is acting and from *which* session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The current session ID.
    pub session_id: Uuid,
    /// The user's role at the time the JWT was issued.
    pub role: UserRole,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid, session_id: Uuid, role: UserRole) -> Self {
        Self {
            user_id,
            session_id,
            role,
            request_time: Utc::now(),
        }
    }

    /// Returns whether the current user is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self.role, UserRole::Admin)
    }

    /// Returns whether the current user is a creator.
    pub fn is_creator(&self) -> bool {
        matches!(self.role, UserRole::Creator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_checks() {
        let ctx = RequestContext::new(Uuid::new_v4(), Uuid::new_v4(), UserRole::Admin);
        assert!(ctx.is_admin());
        assert!(!ctx.is_creator());

        let ctx = RequestContext::new(Uuid::new_v4(), Uuid::new_v4(), UserRole::Fan);
        assert!(!ctx.is_admin());
        assert!(!ctx.is_creator());
    }
}
