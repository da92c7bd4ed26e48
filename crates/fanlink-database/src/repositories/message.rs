//! Message repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use fanlink_core::error::{AppError, ErrorKind};
use fanlink_core::result::AppResult;
use fanlink_core::types::pagination::{PageRequest, PageResponse};
use fanlink_entity::earning::{Earning, EarningKind};
use fanlink_entity::message::{CreateMessage, Message};

/// Repository for direct messages.
#[derive(Debug, Clone)]
pub struct MessageRepository {
    pool: PgPool,
}

impl MessageRepository {
    /// Create a new message repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a free message.
    pub async fn create(&self, data: &CreateMessage) -> AppResult<Message> {
        sqlx::query_as::<_, Message>(
            "INSERT INTO messages (sender_id, recipient_id, content, is_paid, cost_cents) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(data.sender_id)
        .bind(data.recipient_id)
        .bind(&data.content)
        .bind(data.is_paid)
        .bind(data.cost_cents)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create message", e))
    }

    /// Insert a paid message and its earning row in one transaction.
    pub async fn create_with_earning(
        &self,
        data: &CreateMessage,
    ) -> AppResult<(Message, Earning)> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let message = sqlx::query_as::<_, Message>(
            "INSERT INTO messages (sender_id, recipient_id, content, is_paid, cost_cents) \
             VALUES ($1, $2, $3, TRUE, $4) \
             RETURNING *",
        )
        .bind(data.sender_id)
        .bind(data.recipient_id)
        .bind(&data.content)
        .bind(data.cost_cents)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create paid message", e)
        })?;

        let earning = sqlx::query_as::<_, Earning>(
            "INSERT INTO earnings (creator_id, payer_id, kind, amount_cents, message_id) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(data.recipient_id)
        .bind(data.sender_id)
        .bind(EarningKind::PaidMessage)
        .bind(data.cost_cents)
        .bind(message.id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to record earning", e))?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit paid message", e)
        })?;

        Ok((message, earning))
    }

    /// List the conversation between two users, newest first.
    pub async fn find_conversation(
        &self,
        user_a: Uuid,
        user_b: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Message>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM messages \
             WHERE (sender_id = $1 AND recipient_id = $2) \
                OR (sender_id = $2 AND recipient_id = $1)",
        )
        .bind(user_a)
        .bind(user_b)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count conversation", e)
        })?;

        let messages = sqlx::query_as::<_, Message>(
            "SELECT * FROM messages \
             WHERE (sender_id = $1 AND recipient_id = $2) \
                OR (sender_id = $2 AND recipient_id = $1) \
             ORDER BY created_at DESC LIMIT $3 OFFSET $4",
        )
        .bind(user_a)
        .bind(user_b)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list conversation", e)
        })?;

        Ok(PageResponse::new(
            messages,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List a user's received messages, newest first.
    pub async fn find_inbox(
        &self,
        recipient_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Message>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM messages WHERE recipient_id = $1")
            .bind(recipient_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count inbox", e))?;

        let messages = sqlx::query_as::<_, Message>(
            "SELECT * FROM messages WHERE recipient_id = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(recipient_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list inbox", e))?;

        Ok(PageResponse::new(
            messages,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Mark a message read. Only the recipient may do this; the WHERE clause
    /// enforces it so a foreign id reads as not-found.
    pub async fn mark_read(&self, id: Uuid, recipient_id: Uuid) -> AppResult<Message> {
        sqlx::query_as::<_, Message>(
            "UPDATE messages SET is_read = TRUE WHERE id = $1 AND recipient_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(recipient_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark message read", e))?
        .ok_or_else(|| AppError::not_found(format!("Message {id} not found")))
    }

    /// Count unread messages for a user.
    pub async fn count_unread(&self, recipient_id: Uuid) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM messages WHERE recipient_id = $1 AND is_read = FALSE",
        )
        .bind(recipient_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count unread", e))?;
        Ok(count as u64)
    }
}
