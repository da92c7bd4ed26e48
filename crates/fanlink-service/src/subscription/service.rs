//! Subscription lifecycle service.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use fanlink_core::error::AppError;
use fanlink_core::types::pagination::{PageRequest, PageResponse};
use fanlink_database::repositories::earning::EarningRepository;
use fanlink_database::repositories::subscription::SubscriptionRepository;
use fanlink_database::repositories::user::UserRepository;
use fanlink_entity::subscription::{CreateSubscription, Subscription, SubscriptionTier};

use crate::context::RequestContext;

/// Base monthly price in cents; tiers multiply it.
const BASE_PRICE_CENTS: i64 = 499;

/// Manages subscriptions between fans and creators.
#[derive(Debug, Clone)]
pub struct SubscriptionService {
    /// Subscription repository.
    subscription_repo: Arc<SubscriptionRepository>,
    /// User repository, for creator lookups.
    user_repo: Arc<UserRepository>,
    /// Earning repository, for subscription revenue records.
    earning_repo: Arc<EarningRepository>,
}

impl SubscriptionService {
    /// Creates a new subscription service.
    pub fn new(
        subscription_repo: Arc<SubscriptionRepository>,
        user_repo: Arc<UserRepository>,
        earning_repo: Arc<EarningRepository>,
    ) -> Self {
        Self {
            subscription_repo,
            user_repo,
            earning_repo,
        }
    }

    /// Monthly price in cents for a tier.
    pub fn price_for_tier(tier: SubscriptionTier) -> i64 {
        BASE_PRICE_CENTS * i64::from(tier.price_multiplier())
    }

    /// Subscribes the current user to a creator.
    ///
    /// A previously canceled or expired subscription for the same pair is
    /// reactivated rather than duplicated; an already-active one is a
    /// conflict. Each new activation records a subscription earning for
    /// the creator.
    pub async fn subscribe(
        &self,
        ctx: &RequestContext,
        creator_id: Uuid,
        tier: SubscriptionTier,
    ) -> Result<Subscription, AppError> {
        if ctx.user_id == creator_id {
            return Err(AppError::validation("Cannot subscribe to yourself"));
        }

        let creator = self
            .user_repo
            .find_by_id(creator_id)
            .await?
            .filter(|u| u.is_creator())
            .ok_or_else(|| AppError::not_found(format!("Creator {creator_id} not found")))?;

        let price_cents = Self::price_for_tier(tier);

        let subscription = match self
            .subscription_repo
            .find_pair(ctx.user_id, creator_id)
            .await?
        {
            Some(existing) if existing.is_active() => {
                return Err(AppError::conflict("Already subscribed to this creator"));
            }
            Some(existing) => {
                self.subscription_repo
                    .reactivate(existing.id, tier, price_cents)
                    .await?
            }
            None => {
                self.subscription_repo
                    .create(&CreateSubscription {
                        subscriber_id: ctx.user_id,
                        creator_id,
                        tier,
                        price_cents,
                    })
                    .await?
            }
        };

        self.earning_repo
            .create_subscription_earning(creator.id, ctx.user_id, subscription.id, price_cents)
            .await?;

        info!(
            subscriber = %ctx.user_id,
            creator = %creator_id,
            tier = %tier,
            price_cents,
            "Subscription activated"
        );
        Ok(subscription)
    }

    /// Lists the current user's subscriptions.
    pub async fn list_subscriptions(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> Result<PageResponse<Subscription>, AppError> {
        self.subscription_repo
            .find_by_subscriber(ctx.user_id, &page)
            .await
    }

    /// Lists subscribers of the current creator.
    pub async fn list_subscribers(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> Result<PageResponse<Subscription>, AppError> {
        if !ctx.is_creator() && !ctx.is_admin() {
            return Err(AppError::forbidden(
                "Only creators can list their subscribers",
            ));
        }
        self.subscription_repo
            .find_by_creator(ctx.user_id, &page)
            .await
    }

    /// Cancels a subscription. Only the subscriber (or an admin) may cancel.
    pub async fn cancel(&self, ctx: &RequestContext, id: Uuid) -> Result<Subscription, AppError> {
        let subscription = self
            .subscription_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Subscription {id} not found")))?;

        if subscription.subscriber_id != ctx.user_id && !ctx.is_admin() {
            return Err(AppError::forbidden("Not your subscription"));
        }
        if !subscription.is_active() {
            return Err(AppError::conflict("Subscription is not active"));
        }

        let canceled = self.subscription_repo.cancel(id).await?;
        info!(subscription_id = %id, subscriber = %ctx.user_id, "Subscription canceled");
        Ok(canceled)
    }
}
