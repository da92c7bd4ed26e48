//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use fanlink_auth::jwt::decoder::JwtDecoder;
use fanlink_auth::jwt::encoder::JwtEncoder;
use fanlink_auth::password::hasher::PasswordHasher;
use fanlink_auth::session::manager::SessionManager;
use fanlink_core::config::AppConfig;

use fanlink_service::account::AccountService;
use fanlink_service::admin::AdminService;
use fanlink_service::creator::CreatorService;
use fanlink_service::kyc::KycService;
use fanlink_service::messaging::MessagingService;
use fanlink_service::payout::PayoutService;
use fanlink_service::subscription::SubscriptionService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token encoder
    pub jwt_encoder: Arc<JwtEncoder>,
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Password hasher (Argon2)
    pub password_hasher: Arc<PasswordHasher>,
    /// Session lifecycle manager
    pub session_manager: Arc<SessionManager>,

    // ── Services ─────────────────────────────────────────────
    /// Registration and own-profile service
    pub account_service: Arc<AccountService>,
    /// Creator browsing service
    pub creator_service: Arc<CreatorService>,
    /// Subscription lifecycle service
    pub subscription_service: Arc<SubscriptionService>,
    /// Messaging service
    pub messaging_service: Arc<MessagingService>,
    /// KYC service
    pub kyc_service: Arc<KycService>,
    /// Payout service
    pub payout_service: Arc<PayoutService>,
    /// Admin service
    pub admin_service: Arc<AdminService>,
}
