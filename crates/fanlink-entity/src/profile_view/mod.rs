//! Profile view entity.

pub mod model;

pub use model::ProfileView;
