//! Object storage configuration (KYC document uploads).

use serde::{Deserialize, Serialize};

/// S3-compatible object storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// S3 endpoint URL (empty for AWS; set for MinIO and friends).
    #[serde(default)]
    pub endpoint: String,
    /// AWS region.
    #[serde(default = "default_region")]
    pub region: String,
    /// Bucket receiving KYC documents.
    pub bucket: String,
    /// Access key ID (empty to use the ambient credential chain).
    #[serde(default)]
    pub access_key: String,
    /// Secret access key.
    #[serde(default)]
    pub secret_key: String,
    /// Presigned upload URL TTL in seconds.
    #[serde(default = "default_upload_ttl")]
    pub upload_url_ttl_seconds: u64,
    /// Maximum accepted document size in bytes.
    #[serde(default = "default_max_document")]
    pub max_document_size_bytes: u64,
}

fn default_region() -> String {
    "us-east-1".to_string()
}

fn default_upload_ttl() -> u64 {
    900 // 15 minutes
}

fn default_max_document() -> u64 {
    20_971_520 // 20 MB
}
