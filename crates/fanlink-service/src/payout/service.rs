//! Payout service. Gates Stripe Connect onboarding behind approved KYC
//! and surfaces a creator's earnings.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use fanlink_core::error::AppError;
use fanlink_core::types::pagination::{PageRequest, PageResponse};
use fanlink_database::repositories::earning::EarningRepository;
use fanlink_database::repositories::user::UserRepository;
use fanlink_entity::earning::Earning;
use fanlink_entity::user::User;
use fanlink_payments::StripeConnectClient;

use crate::context::RequestContext;

/// A creator's earnings page plus the lifetime total.
#[derive(Debug, Clone, serde::Serialize)]
pub struct EarningsSummary {
    /// Page of individual earnings, newest first.
    pub earnings: PageResponse<Earning>,
    /// Lifetime earnings in cents.
    pub total_cents: i64,
}

/// Handles Connect onboarding and earnings queries.
#[derive(Debug, Clone)]
pub struct PayoutService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Earning repository.
    earning_repo: Arc<EarningRepository>,
    /// Stripe Connect OAuth client.
    stripe: Arc<StripeConnectClient>,
}

impl PayoutService {
    /// Creates a new payout service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        earning_repo: Arc<EarningRepository>,
        stripe: Arc<StripeConnectClient>,
    ) -> Self {
        Self {
            user_repo,
            earning_repo,
            stripe,
        }
    }

    /// Builds the Stripe Connect authorize URL for the current creator.
    ///
    /// Requires the creator role and approved KYC. The user id rides in
    /// the OAuth `state` parameter and is checked on callback.
    pub async fn connect_url(&self, ctx: &RequestContext) -> Result<String, AppError> {
        let user = self.require_eligible_creator(ctx).await?;
        Ok(self.stripe.authorize_url(&user.id.to_string()))
    }

    /// Completes Connect onboarding from the OAuth callback.
    ///
    /// The `state` must match the authenticated caller, then the code is
    /// exchanged for a connected account id and stored on the user.
    pub async fn complete_onboarding(
        &self,
        ctx: &RequestContext,
        code: &str,
        state: &str,
    ) -> Result<User, AppError> {
        let state_user: Uuid = state
            .parse()
            .map_err(|_| AppError::validation("Malformed state parameter"))?;
        if state_user != ctx.user_id {
            return Err(AppError::forbidden("State does not match current user"));
        }
        self.require_eligible_creator(ctx).await?;

        let token = self.stripe.exchange_code(code).await?;
        let user = self
            .user_repo
            .set_stripe_account(ctx.user_id, &token.stripe_user_id)
            .await?;

        info!(
            user_id = %ctx.user_id,
            account = %token.stripe_user_id,
            "Stripe account connected"
        );
        Ok(user)
    }

    /// Returns the current creator's earnings with the lifetime total.
    pub async fn earnings(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> Result<EarningsSummary, AppError> {
        if !ctx.is_creator() && !ctx.is_admin() {
            return Err(AppError::forbidden("Only creators have earnings"));
        }
        let earnings = self.earning_repo.find_by_creator(ctx.user_id, &page).await?;
        let total_cents = self.earning_repo.total_for_creator(ctx.user_id).await?;

        Ok(EarningsSummary {
            earnings,
            total_cents,
        })
    }

    /// Payout onboarding eligibility: creator role and approved KYC.
    async fn require_eligible_creator(&self, ctx: &RequestContext) -> Result<User, AppError> {
        let user = self
            .user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;
        if !user.is_creator() {
            return Err(AppError::forbidden("Only creators can set up payouts"));
        }
        if !user.kyc_status.payout_eligible() {
            return Err(AppError::forbidden(
                "KYC approval is required before payout setup",
            ));
        }
        Ok(user)
    }
}
