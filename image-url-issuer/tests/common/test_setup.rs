use std::sync::Arc;

use aws_credential_types::Credentials;
use aws_sdk_s3::{
    config::{BehaviorVersion, Region},
    Client as S3Client,
};
use image_url_issuer::{handlers::function_handler, media_storage::MediaStorage};
use lambda_http::{Body, Request, Response};

pub const TEST_BUCKET: &str = "image-uploads-test";
pub const TEST_REGION: &str = "us-east-1";

/// Initialize tracing for tests
pub fn setup_test_env() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .ok();
}

/// S3 client with static credentials; presigning never leaves the process
pub fn offline_s3_client() -> S3Client {
    let config = aws_sdk_s3::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new(TEST_REGION))
        .credentials_provider(Credentials::from_keys(
            "AKIDEXAMPLE",
            "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY",
            None,
        ))
        .build();

    S3Client::from_conf(config)
}

pub struct TestContext {
    pub media_storage: MediaStorage,
}

impl TestContext {
    pub fn new() -> Self {
        setup_test_env();

        Self {
            media_storage: MediaStorage::new(
                Arc::new(offline_s3_client()),
                TEST_BUCKET.to_string(),
            ),
        }
    }

    pub async fn invoke(&self, event: Request) -> Response<Body> {
        function_handler(&self.media_storage, event)
            .await
            .expect("handler should always produce a response")
    }
}
