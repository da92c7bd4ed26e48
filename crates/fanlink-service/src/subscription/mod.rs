//! Subscription lifecycle: subscribe, list, cancel.

pub mod service;

pub use service::SubscriptionService;
