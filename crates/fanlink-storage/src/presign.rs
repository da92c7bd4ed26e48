//! Presigned upload URL issuance against S3-compatible object storage.

use std::time::Duration;

use aws_sdk_s3::presigning::PresigningConfig;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use fanlink_core::config::storage::StorageConfig;
use fanlink_core::error::AppError;
use fanlink_core::result::AppResult;

/// A presigned PUT URL plus the storage key the client must upload to.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PresignedUpload {
    /// Time-limited upload URL.
    pub upload_url: String,
    /// Object key within the bucket.
    pub key: String,
    /// When the URL stops working.
    pub expires_at: DateTime<Utc>,
    /// Largest document the platform accepts, in bytes. Presigned PUTs
    /// cannot bound the body server-side, so the limit ships to the client.
    pub max_size_bytes: u64,
}

/// Issues presigned upload URLs for KYC documents.
#[derive(Debug, Clone)]
pub struct UploadUrlIssuer {
    client: aws_sdk_s3::Client,
    bucket: String,
    url_ttl: Duration,
    max_document_size_bytes: u64,
}

impl UploadUrlIssuer {
    /// Builds the S3 client from configuration.
    ///
    /// Static credentials from config take precedence; with none set the
    /// ambient AWS credential chain is used.
    pub async fn new(config: &StorageConfig) -> AppResult<Self> {
        tracing::info!(
            bucket = %config.bucket,
            region = %config.region,
            "Initializing object storage client"
        );

        let s3_config = if config.access_key.is_empty() {
            let base = aws_config::defaults(aws_config::BehaviorVersion::latest())
                .region(aws_sdk_s3::config::Region::new(config.region.clone()))
                .load()
                .await;
            let mut builder = aws_sdk_s3::config::Builder::from(&base).force_path_style(true);
            if !config.endpoint.is_empty() {
                builder = builder.endpoint_url(&config.endpoint);
            }
            builder.build()
        } else {
            let credentials = aws_sdk_s3::config::Credentials::new(
                config.access_key.clone(),
                config.secret_key.clone(),
                None,
                None,
                "fanlink-config",
            );
            let mut builder = aws_sdk_s3::config::Builder::new()
                .behavior_version(aws_sdk_s3::config::BehaviorVersion::latest())
                .region(aws_sdk_s3::config::Region::new(config.region.clone()))
                .credentials_provider(credentials)
                .force_path_style(true);
            if !config.endpoint.is_empty() {
                builder = builder.endpoint_url(&config.endpoint);
            }
            builder.build()
        };

        Ok(Self {
            client: aws_sdk_s3::Client::from_conf(s3_config),
            bucket: config.bucket.clone(),
            url_ttl: Duration::from_secs(config.upload_url_ttl_seconds),
            max_document_size_bytes: config.max_document_size_bytes,
        })
    }

    /// Issues a presigned PUT URL for a KYC document upload.
    pub async fn presign_kyc_upload(
        &self,
        user_id: Uuid,
        content_type: &str,
    ) -> AppResult<PresignedUpload> {
        let key = kyc_document_key(user_id);

        let presigning = PresigningConfig::expires_in(self.url_ttl)
            .map_err(|e| AppError::storage(format!("Invalid presign TTL: {e}")))?;

        let presigned = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .content_type(content_type)
            .presigned(presigning)
            .await
            .map_err(|e| AppError::storage(format!("Failed to presign upload URL: {e}")))?;

        let expires_at = Utc::now()
            + chrono::Duration::from_std(self.url_ttl)
                .unwrap_or_else(|_| chrono::Duration::seconds(900));

        Ok(PresignedUpload {
            upload_url: presigned.uri().to_string(),
            key,
            expires_at,
            max_size_bytes: self.max_document_size_bytes,
        })
    }
}

/// Builds the object key for a KYC document: scoped per user, random
/// suffix so resubmissions never overwrite earlier uploads.
fn kyc_document_key(user_id: Uuid) -> String {
    format!("kyc/{user_id}/{}", Uuid::new_v4())
}
