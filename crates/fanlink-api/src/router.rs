//! Route definitions for the FanLink HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(creator_routes())
        .merge(subscription_routes())
        .merge(message_routes())
        .merge(kyc_routes())
        .merge(payout_routes())
        .merge(admin_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: register, login, logout
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
}

/// User self-service endpoints
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/me", get(handlers::user::get_profile))
        .route("/users/me", put(handlers::user::update_profile))
}

/// Creator browsing and profile views
fn creator_routes() -> Router<AppState> {
    Router::new()
        .route("/creators", get(handlers::creator::list_creators))
        .route(
            "/creators/me/views",
            get(handlers::creator::list_profile_views),
        )
        .route("/creators/{id}", get(handlers::creator::get_creator))
}

/// Subscription lifecycle
fn subscription_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/subscriptions",
            post(handlers::subscription::subscribe),
        )
        .route(
            "/subscriptions",
            get(handlers::subscription::list_subscriptions),
        )
        .route(
            "/subscriptions/subscribers",
            get(handlers::subscription::list_subscribers),
        )
        .route(
            "/subscriptions/{id}",
            delete(handlers::subscription::cancel_subscription),
        )
}

/// Messaging
fn message_routes() -> Router<AppState> {
    Router::new()
        .route("/messages", post(handlers::message::send_message))
        .route("/messages/inbox", get(handlers::message::inbox))
        .route(
            "/messages/unread-count",
            get(handlers::message::unread_count),
        )
        .route(
            "/messages/conversation/{user_id}",
            get(handlers::message::conversation),
        )
        .route("/messages/{id}/read", put(handlers::message::mark_read))
}

/// KYC upload, submission, and review
fn kyc_routes() -> Router<AppState> {
    Router::new()
        .route("/kyc/upload-url", post(handlers::kyc::request_upload_url))
        .route("/kyc/submit", post(handlers::kyc::submit))
        .route("/kyc/status", get(handlers::kyc::status))
        .route("/kyc/pending", get(handlers::kyc::list_pending))
        .route("/kyc/{id}/review", post(handlers::kyc::review))
}

/// Payout onboarding and earnings
fn payout_routes() -> Router<AppState> {
    Router::new()
        .route("/payouts/connect", get(handlers::payout::connect))
        .route("/payouts/callback", get(handlers::payout::callback))
        .route("/payouts/earnings", get(handlers::payout::earnings))
}

/// Admin-only endpoints
fn admin_routes() -> Router<AppState> {
    Router::new().route("/admin/wipe", post(handlers::admin::wipe_data))
}

/// Health check endpoint (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Build CORS layer from configuration
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use axum::http::{HeaderValue, Method};
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods).allow_headers(Any);

    cors.max_age(std::time::Duration::from_secs(
        cors_config.max_age_seconds,
    ))
}
