//! # fanlink-payments
//!
//! Stripe Connect OAuth client. Builds the authorize URL creators are sent
//! to and exchanges the callback code for a connected account id.

pub mod connect;

pub use connect::StripeConnectClient;
