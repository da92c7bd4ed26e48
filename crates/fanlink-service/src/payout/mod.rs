//! Stripe Connect onboarding and earnings.

pub mod service;

pub use service::PayoutService;
