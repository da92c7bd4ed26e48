//! KYC submission entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Accepted identity document types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "document_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// Passport photo page.
    Passport,
    /// Driver's license, both sides.
    DriversLicense,
    /// National ID card.
    IdCard,
}

impl DocumentType {
    /// Return the type as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Passport => "passport",
            Self::DriversLicense => "drivers_license",
            Self::IdCard => "id_card",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = fanlink_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "passport" => Ok(Self::Passport),
            "drivers_license" => Ok(Self::DriversLicense),
            "id_card" => Ok(Self::IdCard),
            _ => Err(fanlink_core::AppError::validation(format!(
                "Invalid document type: '{s}'. Expected one of: passport, drivers_license, id_card"
            ))),
        }
    }
}

/// Review status of a single KYC submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "submission_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    /// Awaiting admin review.
    Pending,
    /// Approved by an admin.
    Approved,
    /// Rejected by an admin.
    Rejected,
}

impl SubmissionStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A KYC document submission awaiting or past review.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct KycSubmission {
    /// Unique submission identifier.
    pub id: Uuid,
    /// The submitting user.
    pub user_id: Uuid,
    /// Document type.
    pub document_type: DocumentType,
    /// Object storage key of the uploaded document.
    pub document_key: String,
    /// Review status.
    pub status: SubmissionStatus,
    /// Reviewing admin, once reviewed.
    pub reviewed_by: Option<Uuid>,
    /// When the review happened.
    pub reviewed_at: Option<DateTime<Utc>>,
    /// Optional reviewer note (e.g. rejection reason).
    pub review_note: Option<String>,
    /// When the submission was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to register a KYC submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateKycSubmission {
    /// The submitting user.
    pub user_id: Uuid,
    /// Document type.
    pub document_type: DocumentType,
    /// Object storage key the client uploaded to.
    pub document_key: String,
}
