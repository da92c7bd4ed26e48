//! KYC verification status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identity verification status for a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "kyc_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum KycStatus {
    /// No documents submitted yet.
    NotSubmitted,
    /// Documents submitted, awaiting admin review.
    Pending,
    /// Identity verified.
    Approved,
    /// Submission rejected; the user may resubmit.
    Rejected,
}

impl KycStatus {
    /// Whether the user may onboard for payouts with this status.
    pub fn payout_eligible(&self) -> bool {
        matches!(self, Self::Approved)
    }

    /// Return the status as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotSubmitted => "not_submitted",
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for KycStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for KycStatus {
    type Err = fanlink_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "not_submitted" => Ok(Self::NotSubmitted),
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(fanlink_core::AppError::validation(format!(
                "Invalid KYC status: '{s}'. Expected one of: not_submitted, pending, approved, rejected"
            ))),
        }
    }
}
