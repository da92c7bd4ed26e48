//! Application builder — wires repositories, services, and state into an
//! Axum app.

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use fanlink_core::config::AppConfig;
use fanlink_core::error::AppError;
use fanlink_database::repositories::{
    admin::AdminRepository, earning::EarningRepository, kyc::KycRepository,
    message::MessageRepository, profile_view::ProfileViewRepository,
    session::SessionRepository, subscription::SubscriptionRepository, user::UserRepository,
};
use fanlink_payments::StripeConnectClient;
use fanlink_service::account::AccountService;
use fanlink_service::admin::AdminService;
use fanlink_service::creator::CreatorService;
use fanlink_service::kyc::KycService;
use fanlink_service::messaging::MessagingService;
use fanlink_service::payout::PayoutService;
use fanlink_service::subscription::SubscriptionService;
use fanlink_storage::presign::UploadUrlIssuer;

use crate::router::build_router;
use crate::state::AppState;

/// Constructs the full application state from configuration and a pool.
pub async fn build_state(config: AppConfig, db_pool: PgPool) -> Result<AppState, AppError> {
    // ── Repositories ─────────────────────────────────────────
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let session_repo = Arc::new(SessionRepository::new(db_pool.clone()));
    let subscription_repo = Arc::new(SubscriptionRepository::new(db_pool.clone()));
    let message_repo = Arc::new(MessageRepository::new(db_pool.clone()));
    let profile_view_repo = Arc::new(ProfileViewRepository::new(db_pool.clone()));
    let earning_repo = Arc::new(EarningRepository::new(db_pool.clone()));
    let kyc_repo = Arc::new(KycRepository::new(db_pool.clone()));
    let admin_repo = Arc::new(AdminRepository::new(db_pool.clone()));

    // ── Auth ─────────────────────────────────────────────────
    let password_hasher = Arc::new(fanlink_auth::password::hasher::PasswordHasher::new());
    let jwt_encoder = Arc::new(fanlink_auth::jwt::encoder::JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(fanlink_auth::jwt::decoder::JwtDecoder::new(&config.auth));
    let session_manager = Arc::new(fanlink_auth::session::manager::SessionManager::new(
        Arc::clone(&user_repo),
        Arc::clone(&session_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&jwt_encoder),
        &config.auth,
    ));

    // ── External clients ─────────────────────────────────────
    let upload_issuer = Arc::new(UploadUrlIssuer::new(&config.storage).await?);
    let stripe_client = Arc::new(StripeConnectClient::new(&config.stripe));

    // ── Services ─────────────────────────────────────────────
    let account_service = Arc::new(AccountService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        config.auth.password_min_length,
    ));
    let creator_service = Arc::new(CreatorService::new(
        Arc::clone(&user_repo),
        Arc::clone(&profile_view_repo),
    ));
    let subscription_service = Arc::new(SubscriptionService::new(
        Arc::clone(&subscription_repo),
        Arc::clone(&user_repo),
        Arc::clone(&earning_repo),
    ));
    let messaging_service = Arc::new(MessagingService::new(
        Arc::clone(&message_repo),
        Arc::clone(&subscription_repo),
        Arc::clone(&user_repo),
    ));
    let kyc_service = Arc::new(KycService::new(
        Arc::clone(&kyc_repo),
        Arc::clone(&user_repo),
        Arc::clone(&upload_issuer),
    ));
    let payout_service = Arc::new(PayoutService::new(
        Arc::clone(&user_repo),
        Arc::clone(&earning_repo),
        Arc::clone(&stripe_client),
    ));
    let admin_service = Arc::new(AdminService::new(
        Arc::clone(&admin_repo),
        config.admin.allow_data_wipe,
    ));

    Ok(AppState {
        config: Arc::new(config),
        db_pool,
        jwt_encoder,
        jwt_decoder,
        password_hasher,
        session_manager,
        account_service,
        creator_service,
        subscription_service,
        messaging_service,
        kyc_service,
        payout_service,
        admin_service,
    })
}

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}
