//! # fanlink-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for all FanLink entities.

pub mod connection;
pub mod migration;
pub mod repositories;
