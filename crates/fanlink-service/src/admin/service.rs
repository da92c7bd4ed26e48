//! Admin service. The data wipe is double-gated: admin role plus an
//! explicit configuration flag that production never sets.

use std::sync::Arc;

use tracing::warn;

use fanlink_core::error::AppError;
use fanlink_database::repositories::admin::AdminRepository;

use crate::context::RequestContext;

/// Administrative operations over the whole dataset.
#[derive(Debug, Clone)]
pub struct AdminService {
    /// Admin repository.
    admin_repo: Arc<AdminRepository>,
    /// Whether the environment allows destructive wipes.
    allow_data_wipe: bool,
}

impl AdminService {
    /// Creates a new admin service.
    pub fn new(admin_repo: Arc<AdminRepository>, allow_data_wipe: bool) -> Self {
        Self {
            admin_repo,
            allow_data_wipe,
        }
    }

    /// Truncates every table. Refused unless the caller is an admin and
    /// the environment explicitly allows wipes.
    pub async fn wipe_all_data(&self, ctx: &RequestContext) -> Result<(), AppError> {
        if !ctx.is_admin() {
            return Err(AppError::forbidden("Admin access required"));
        }
        if !self.allow_data_wipe {
            return Err(AppError::forbidden(
                "Data wipe is disabled in this environment",
            ));
        }

        warn!(admin = %ctx.user_id, "Wiping all platform data");
        self.admin_repo.wipe_all_data().await
    }
}
