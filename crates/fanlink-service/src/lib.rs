//! # fanlink-service
//!
//! Business logic services for the FanLink platform. Each service wraps
//! the repositories it needs and enforces the platform's rules: the
//! subscription gate on messaging, KYC before payouts, admin-only review
//! and wipe operations.

pub mod account;
pub mod admin;
pub mod context;
pub mod creator;
pub mod kyc;
pub mod messaging;
pub mod payout;
pub mod subscription;

pub use account::AccountService;
pub use admin::AdminService;
pub use context::RequestContext;
pub use creator::CreatorService;
pub use kyc::KycService;
pub use messaging::MessagingService;
pub use payout::PayoutService;
pub use subscription::SubscriptionService;
