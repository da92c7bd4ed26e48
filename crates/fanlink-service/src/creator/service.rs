//! Creator browsing service.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use fanlink_core::error::AppError;
use fanlink_core::types::pagination::{PageRequest, PageResponse};
use fanlink_database::repositories::profile_view::ProfileViewRepository;
use fanlink_database::repositories::user::UserRepository;
use fanlink_entity::profile_view::ProfileView;
use fanlink_entity::user::User;

use crate::context::RequestContext;

/// Lists creator profiles and records who viewed whom.
#[derive(Debug, Clone)]
pub struct CreatorService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Profile view repository.
    view_repo: Arc<ProfileViewRepository>,
}

impl CreatorService {
    /// Creates a new creator service.
    pub fn new(user_repo: Arc<UserRepository>, view_repo: Arc<ProfileViewRepository>) -> Self {
        Self {
            user_repo,
            view_repo,
        }
    }

    /// Lists creator profiles, newest first.
    pub async fn list_creators(&self, page: PageRequest) -> Result<PageResponse<User>, AppError> {
        self.user_repo.find_creators(&page).await
    }

    /// Fetches a single creator profile and records the view.
    ///
    /// Viewing your own profile is not counted. Non-creator users are not
    /// browsable and read as not found.
    pub async fn get_creator(&self, ctx: &RequestContext, id: Uuid) -> Result<User, AppError> {
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .filter(|u| u.is_creator())
            .ok_or_else(|| AppError::not_found(format!("Creator {id} not found")))?;

        if ctx.user_id != id {
            self.view_repo.record(ctx.user_id, id).await?;
            debug!(viewer = %ctx.user_id, viewed = %id, "Recorded profile view");
        }

        Ok(user)
    }

    /// Lists who viewed the current creator's profile.
    pub async fn list_profile_views(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> Result<PageResponse<ProfileView>, AppError> {
        if !ctx.is_creator() && !ctx.is_admin() {
            return Err(AppError::forbidden(
                "Only creators can see their profile views",
            ));
        }
        self.view_repo.find_by_viewed(ctx.user_id, &page).await
    }
}
