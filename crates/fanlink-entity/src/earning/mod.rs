//! Earning entity.

pub mod model;

pub use model::{Earning, EarningKind};
