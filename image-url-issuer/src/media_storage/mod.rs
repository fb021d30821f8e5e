//! S3 presigned URL generation for image uploads and downloads
mod error;

use std::sync::Arc;
use std::time::Duration;

use aws_sdk_s3::{presigning::PresigningConfig, Client as S3Client};
use chrono::{DateTime, Utc};

pub use error::{BucketError, BucketResult};

/// Lifetime of an upload URL: 10 minutes
pub const UPLOAD_URL_EXPIRY_SECS: u64 = 10 * 60;

/// Lifetime of a download URL: 24 hours
pub const DOWNLOAD_URL_EXPIRY_SECS: u64 = 24 * 60 * 60;

/// Content type every upload URL is signed for
pub const UPLOAD_CONTENT_TYPE: &str = "image/png";

/// Presigned URL with expiration information
#[derive(Debug, Clone)]
pub struct PresignedUrl {
    /// The presigned URL
    pub url: String,
    /// UTC instant when the URL expires
    pub expires_at: DateTime<Utc>,
}

/// Image storage client for S3 presigning
pub struct MediaStorage {
    s3_client: Arc<S3Client>,
    bucket_name: String,
}

impl MediaStorage {
    /// Creates a new media storage client
    ///
    /// # Arguments
    ///
    /// * `s3_client` - Pre-configured S3 client
    /// * `bucket_name` - S3 bucket that holds the images
    #[must_use]
    pub const fn new(s3_client: Arc<S3Client>, bucket_name: String) -> Self {
        Self {
            s3_client,
            bucket_name,
        }
    }

    /// Bucket every URL is signed against
    #[must_use]
    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }

    fn presigning_config(expiry_secs: u64) -> BucketResult<PresigningConfig> {
        PresigningConfig::expires_in(Duration::from_secs(expiry_secs)).map_err(|e| {
            BucketError::ConfigError(format!("Failed to create presigning config: {e}"))
        })
    }

    // An empty key would sign a request against the bucket itself
    fn validate_key(s3_key: &str) -> BucketResult<()> {
        if s3_key.is_empty() {
            return Err(BucketError::InvalidInput("object key is empty".to_string()));
        }
        Ok(())
    }

    /// Generates a presigned URL for uploading a PNG image
    ///
    /// # Arguments
    ///
    /// * `s3_key` - Key the image will be stored under
    ///
    /// # Returns
    ///
    /// A `PresignedUrl` valid for [`UPLOAD_URL_EXPIRY_SECS`], signed for
    /// `Content-Type: image/png`
    ///
    /// # Errors
    ///
    /// Returns `BucketError::InvalidInput` if the key is empty
    /// Returns `BucketError::ConfigError` if presigning config creation fails
    /// Returns `BucketError::S3Error` if presigned URL generation fails
    pub async fn generate_presigned_put_url(&self, s3_key: &str) -> BucketResult<PresignedUrl> {
        Self::validate_key(s3_key)?;
        let presigned_config = Self::presigning_config(UPLOAD_URL_EXPIRY_SECS)?;

        let presigned_request = self
            .s3_client
            .put_object()
            .bucket(&self.bucket_name)
            .key(s3_key)
            .content_type(UPLOAD_CONTENT_TYPE)
            .presigned(presigned_config)
            .await
            .map_err(|e| BucketError::S3Error(format!("Failed to generate presigned URL: {e}")))?;

        Ok(PresignedUrl {
            url: presigned_request.uri().to_string(),
            expires_at: Utc::now() + Duration::from_secs(UPLOAD_URL_EXPIRY_SECS),
        })
    }

    /// Generates a presigned URL for downloading an image
    ///
    /// # Errors
    ///
    /// Returns `BucketError::InvalidInput` if the key is empty
    /// Returns `BucketError::ConfigError` if presigning config creation fails
    /// Returns `BucketError::S3Error` if presigned URL generation fails
    pub async fn generate_presigned_get_url(&self, s3_key: &str) -> BucketResult<PresignedUrl> {
        Self::validate_key(s3_key)?;
        let presigned_config = Self::presigning_config(DOWNLOAD_URL_EXPIRY_SECS)?;

        let presigned_request = self
            .s3_client
            .get_object()
            .bucket(&self.bucket_name)
            .key(s3_key)
            .presigned(presigned_config)
            .await
            .map_err(|e| BucketError::S3Error(format!("Failed to generate presigned URL: {e}")))?;

        Ok(PresignedUrl {
            url: presigned_request.uri().to_string(),
            expires_at: Utc::now() + Duration::from_secs(DOWNLOAD_URL_EXPIRY_SECS),
        })
    }
}
