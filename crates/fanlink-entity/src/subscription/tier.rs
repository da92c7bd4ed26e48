//! Subscription tier enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Subscription tiers offered by creators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "subscription_tier", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    /// Entry tier.
    Basic,
    /// Mid tier.
    Premium,
    /// Top tier.
    Vip,
}

impl SubscriptionTier {
    /// Price multiplier applied to the creator's base subscription price.
    pub fn price_multiplier(&self) -> u32 {
        match self {
            Self::Basic => 1,
            Self::Premium => 2,
            Self::Vip => 5,
        }
    }

    /// Return the tier as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Premium => "premium",
            Self::Vip => "vip",
        }
    }
}

impl fmt::Display for SubscriptionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SubscriptionTier {
    type Err = fanlink_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "premium" => Ok(Self::Premium),
            "vip" => Ok(Self::Vip),
            _ => Err(fanlink_core::AppError::validation(format!(
                "Invalid subscription tier: '{s}'. Expected one of: basic, premium, vip"
            ))),
        }
    }
}
