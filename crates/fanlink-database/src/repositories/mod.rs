//! Concrete repository implementations, one per entity.

pub mod admin;
pub mod earning;
pub mod kyc;
pub mod message;
pub mod profile_view;
pub mod session;
pub mod subscription;
pub mod user;
