//! Messaging service. Enforces the subscription gate and paid-message
//! pricing before anything touches the messages table.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use fanlink_core::error::AppError;
use fanlink_core::types::pagination::{PageRequest, PageResponse};
use fanlink_database::repositories::message::MessageRepository;
use fanlink_database::repositories::subscription::SubscriptionRepository;
use fanlink_database::repositories::user::UserRepository;
use fanlink_entity::message::{CreateMessage, Message};

use crate::context::RequestContext;

/// Maximum message body length in characters.
const MAX_CONTENT_LENGTH: usize = 5_000;

/// Request to send a message.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SendMessageRequest {
    /// The receiving user.
    pub recipient_id: Uuid,
    /// Message body.
    pub content: String,
    /// Whether to send as a paid message. The charge is the recipient
    /// creator's hourly rate.
    pub paid: bool,
}

/// Sends and reads direct messages.
#[derive(Debug, Clone)]
pub struct MessagingService {
    /// Message repository.
    message_repo: Arc<MessageRepository>,
    /// Subscription repository, for the messaging gate.
    subscription_repo: Arc<SubscriptionRepository>,
    /// User repository, for recipient lookups.
    user_repo: Arc<UserRepository>,
}

impl MessagingService {
    /// Creates a new messaging service.
    pub fn new(
        message_repo: Arc<MessageRepository>,
        subscription_repo: Arc<SubscriptionRepository>,
        user_repo: Arc<UserRepository>,
    ) -> Self {
        Self {
            message_repo,
            subscription_repo,
            user_repo,
        }
    }

    /// Sends a message, enforcing the subscription gate.
    ///
    /// A fan may message a creator only while holding an active
    /// subscription to them; a creator may reply to anyone actively
    /// subscribed to them; admins bypass the gate. Paid messages charge
    /// the recipient creator's hourly rate and record the earning in the
    /// same transaction as the message insert.
    pub async fn send_message(
        &self,
        ctx: &RequestContext,
        req: SendMessageRequest,
    ) -> Result<Message, AppError> {
        let content = req.content.trim();
        if content.is_empty() {
            return Err(AppError::validation("Message content cannot be empty"));
        }
        if content.chars().count() > MAX_CONTENT_LENGTH {
            return Err(AppError::validation(format!(
                "Message content exceeds {MAX_CONTENT_LENGTH} characters"
            )));
        }
        if req.recipient_id == ctx.user_id {
            return Err(AppError::validation("Cannot message yourself"));
        }

        let recipient = self
            .user_repo
            .find_by_id(req.recipient_id)
            .await?
            .ok_or_else(|| AppError::not_found("Recipient not found"))?;

        self.check_gate(ctx, &recipient).await?;

        if req.paid {
            if !recipient.accepts_paid_messages() {
                return Err(AppError::validation(
                    "Recipient does not accept paid messages",
                ));
            }
            // accepts_paid_messages guarantees the rate is set
            let cost_cents = recipient.hourly_rate_cents.unwrap_or_default();
            let (message, earning) = self
                .message_repo
                .create_with_earning(&CreateMessage {
                    sender_id: ctx.user_id,
                    recipient_id: recipient.id,
                    content: content.to_string(),
                    is_paid: true,
                    cost_cents,
                })
                .await?;
            info!(
                message_id = %message.id,
                earning_id = %earning.id,
                cost_cents,
                "Paid message sent"
            );
            Ok(message)
        } else {
            self.message_repo
                .create(&CreateMessage {
                    sender_id: ctx.user_id,
                    recipient_id: recipient.id,
                    content: content.to_string(),
                    is_paid: false,
                    cost_cents: 0,
                })
                .await
        }
    }

    /// The messaging gate. Ordered so the common fan-to-creator case
    /// checks one subscription row.
    async fn check_gate(
        &self,
        ctx: &RequestContext,
        recipient: &fanlink_entity::user::User,
    ) -> Result<(), AppError> {
        if ctx.is_admin() {
            return Ok(());
        }
        if recipient.is_creator()
            && self
                .subscription_repo
                .has_active(ctx.user_id, recipient.id)
                .await?
        {
            return Ok(());
        }
        if ctx.is_creator()
            && self
                .subscription_repo
                .has_active(recipient.id, ctx.user_id)
                .await?
        {
            return Ok(());
        }
        Err(AppError::forbidden(
            "An active subscription is required to message this user",
        ))
    }

    /// Lists the conversation between the current user and another user.
    pub async fn get_conversation(
        &self,
        ctx: &RequestContext,
        other_user_id: Uuid,
        page: PageRequest,
    ) -> Result<PageResponse<Message>, AppError> {
        self.message_repo
            .find_conversation(ctx.user_id, other_user_id, &page)
            .await
    }

    /// Lists messages received by the current user, newest first.
    pub async fn get_inbox(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> Result<PageResponse<Message>, AppError> {
        self.message_repo.find_inbox(ctx.user_id, &page).await
    }

    /// Marks a received message as read.
    pub async fn mark_read(&self, ctx: &RequestContext, id: Uuid) -> Result<Message, AppError> {
        self.message_repo.mark_read(id, ctx.user_id).await
    }

    /// Counts the current user's unread messages.
    pub async fn count_unread(&self, ctx: &RequestContext) -> Result<u64, AppError> {
        self.message_repo.count_unread(ctx.user_id).await
    }
}
