//! # fanlink-auth
//!
//! Authentication for the FanLink platform.
//!
//! ## Modules
//!
//! - `jwt` — access token creation and validation
//! - `password` — Argon2id password hashing
//! - `session` — session lifecycle (login, validate, logout)

pub mod jwt;
pub mod password;
pub mod session;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
pub use session::SessionManager;
