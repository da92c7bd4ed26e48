//! # fanlink-storage
//!
//! Object storage integration for FanLink. Issues time-limited presigned
//! PUT URLs so clients upload KYC documents directly to the bucket; the
//! server never proxies document bytes.

pub mod presign;

pub use presign::{PresignedUpload, UploadUrlIssuer};
