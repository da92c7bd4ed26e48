//! # fanlink-entity
//!
//! Domain entity models for FanLink. Every struct in this crate represents
//! a database table row or a domain value object. All entities derive
//! `Debug`, `Clone`, `Serialize`, `Deserialize`, and database entities
//! additionally derive `sqlx::FromRow`.

pub mod earning;
pub mod kyc;
pub mod message;
pub mod profile_view;
pub mod session;
pub mod subscription;
pub mod user;
