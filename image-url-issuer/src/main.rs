use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;
use image_url_issuer::{
    handlers::function_handler,
    media_storage::MediaStorage,
    types::{Environment, IssuerConfig},
};
use lambda_http::{run, service_fn, Error};
use tracing_subscriber::{filter::LevelFilter, fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let environment = Environment::from_env()?;

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(environment.tracing_level()).into())
        .from_env_lossy();

    // JSON logs for CloudWatch, plain logs for local development
    match environment {
        Environment::Production => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_target(false)
                .without_time()
                .init();
        }
        Environment::Development => {
            fmt().with_env_filter(env_filter).init();
        }
    }

    let config = IssuerConfig::from_env()?;
    let s3_client = Arc::new(S3Client::from_conf(
        environment.s3_client_config(&config.region).await,
    ));
    let media_storage = MediaStorage::new(s3_client, config.upload_bucket);

    tracing::info!(
        region = %config.region,
        bucket = media_storage.bucket_name(),
        "image url issuer started"
    );

    run(service_fn(|event| function_handler(&media_storage, event))).await
}
