//! KYC submission entity.

pub mod model;

pub use model::{CreateKycSubmission, DocumentType, KycSubmission, SubmissionStatus};
