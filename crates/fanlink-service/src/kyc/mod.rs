//! KYC document upload and review.

pub mod service;

pub use service::KycService;
