//! Subscription-gated direct messaging.

pub mod service;

pub use service::MessagingService;
