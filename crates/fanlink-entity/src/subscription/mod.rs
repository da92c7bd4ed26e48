//! Subscription entity and related enums.

pub mod model;
pub mod status;
pub mod tier;

pub use model::{CreateSubscription, Subscription};
pub use status::SubscriptionStatus;
pub use tier::SubscriptionTier;
