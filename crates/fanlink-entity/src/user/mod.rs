//! User entity and related enums.

pub mod kyc_status;
pub mod model;
pub mod role;

pub use kyc_status::KycStatus;
pub use model::{CreateUser, UpdateProfile, User};
pub use role::UserRole;
