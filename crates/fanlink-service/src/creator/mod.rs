//! Creator profile browsing and view tracking.

pub mod service;

pub use service::CreatorService;
