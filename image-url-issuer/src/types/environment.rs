//! Environment configuration for different deployment stages

use std::env;
use std::time::Duration;

use aws_config::{retry::RetryConfig, timeout::TimeoutConfig, BehaviorVersion, Region};
use thiserror::Error;
use tracing::Level;

/// Errors raised while reading configuration at start-up
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is not set
    #[error("{0} environment variable is not set")]
    MissingVariable(&'static str),

    /// `APP_ENV` holds an unknown stage name
    #[error("Invalid environment: {0}")]
    InvalidEnvironment(String),
}

/// Application environment configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Deployed Lambda function
    Production,
    /// Local development (uses `LocalStack`)
    Development,
}

impl Environment {
    /// Creates an Environment from the `APP_ENV` environment variable
    ///
    /// Defaults to `Production` when the variable is unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvironment` if `APP_ENV` holds an unknown value
    pub fn from_env() -> Result<Self, ConfigError> {
        let env = env::var("APP_ENV")
            .unwrap_or_else(|_| "production".to_string())
            .trim()
            .to_lowercase();

        match env.as_str() {
            "production" => Ok(Self::Production),
            "development" => Ok(Self::Development),
            _ => Err(ConfigError::InvalidEnvironment(env)),
        }
    }

    /// Returns the endpoint URL to use for AWS services
    #[must_use]
    pub const fn override_aws_endpoint_url(&self) -> Option<&str> {
        match self {
            Self::Production => None,
            Self::Development => Some("http://localhost:4566"),
        }
    }

    /// AWS configuration with retry and timeout settings
    pub async fn aws_config(&self, region: &str) -> aws_config::SdkConfig {
        let retry_config = RetryConfig::standard()
            .with_max_attempts(3)
            .with_initial_backoff(Duration::from_millis(50));

        let timeout_config = TimeoutConfig::builder()
            .operation_timeout(Duration::from_secs(30))
            .build();

        let mut config_builder = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_owned()))
            .load()
            .await
            .to_builder()
            .retry_config(retry_config)
            .timeout_config(timeout_config);

        if let Some(endpoint_url) = self.override_aws_endpoint_url() {
            config_builder = config_builder.endpoint_url(endpoint_url);
        }

        config_builder.build()
    }

    /// AWS S3 service configuration
    pub async fn s3_client_config(&self, region: &str) -> aws_sdk_s3::Config {
        let aws_config = self.aws_config(region).await;
        let s3_config: aws_sdk_s3::Config = (&aws_config).into();
        let mut builder = s3_config.to_builder();

        // LocalStack only serves path-style bucket addressing
        if matches!(self, Self::Development) {
            builder.set_force_path_style(Some(true));
        }

        builder.build()
    }

    /// Default log level, overridable through `RUST_LOG`
    #[must_use]
    pub const fn tracing_level(&self) -> Level {
        match self {
            Self::Production => Level::INFO,
            Self::Development => Level::DEBUG,
        }
    }
}

/// Process-wide settings handed to the storage client at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuerConfig {
    /// Region of the S3 client
    pub region: String,
    /// Bucket that receives uploads and serves downloads
    pub upload_bucket: String,
}

impl IssuerConfig {
    /// Reads `AWS_REGION` and `UPLOAD_BUCKET` from the process environment
    ///
    /// `UploadBucket` is accepted when `UPLOAD_BUCKET` is absent, matching the
    /// variable name of the existing deployment template.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingVariable` if the region or the bucket is not set
    pub fn from_env() -> Result<Self, ConfigError> {
        let region = non_empty_var("AWS_REGION").ok_or(ConfigError::MissingVariable("AWS_REGION"))?;
        let upload_bucket = non_empty_var("UPLOAD_BUCKET")
            .or_else(|| non_empty_var("UploadBucket"))
            .ok_or(ConfigError::MissingVariable("UPLOAD_BUCKET"))?;

        Ok(Self {
            region,
            upload_bucket,
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}
