//! Route handlers organized by domain.

pub mod admin;
pub mod auth;
pub mod creator;
pub mod health;
pub mod kyc;
pub mod message;
pub mod payout;
pub mod subscription;
pub mod user;
